//! # Credentials HTTP Client
//!
//! Holds the Jenkins root URL and the shared transport and augmenter the
//! endpoint methods go through. All fields are read-only after construction,
//! so a client can be shared across concurrent calls.

use std::sync::Arc;

use crate::augment::{CapabilityAugmenter, ClassesAugmenter};
use crate::models::JenkinsAuth;
use crate::transport::{ReqwestTransport, Transport};

/// Represents a Blue Ocean credentials API client
pub struct CredentialsClient {
  pub(crate) root_url: String,
  pub(crate) transport: Arc<dyn Transport>,
  pub(crate) augmenter: Arc<dyn CapabilityAugmenter>,
}

impl CredentialsClient {
  /// Create a client for the Jenkins server at `root_url`
  ///
  /// Without a `transport`, an anonymous [`ReqwestTransport`] is used. Search
  /// results are augmented by a [`ClassesAugmenter`] until
  /// [`CredentialsClient::with_augmenter`] says otherwise. The augmenter
  /// fetches class metadata over its own anonymous [`ReqwestTransport`], so
  /// `transport` only ever sees the client's own requests.
  pub fn new(root_url: &str, transport: Option<Arc<dyn Transport>>) -> Self {
    let transport: Arc<dyn Transport> = match transport {
      Some(transport) => transport,
      None => Arc::new(ReqwestTransport::new(None)),
    };
    let augmenter = Arc::new(ClassesAugmenter::new(root_url, Arc::new(ReqwestTransport::new(None))));

    Self {
      root_url: root_url.to_string(),
      transport,
      augmenter,
    }
  }

  /// Replace the step applied to search results
  pub fn with_augmenter(mut self, augmenter: Arc<dyn CapabilityAugmenter>) -> Self {
    self.augmenter = augmenter;
    self
  }

  /// The Jenkins root URL requests are built from
  pub fn root_url(&self) -> &str {
    &self.root_url
  }
}

/// Create a credentials client that talks to Jenkins over HTTP, optionally
/// authenticating as a user with an API token
///
/// The class metadata lookup authenticates with the same credentials over a
/// transport of its own.
pub fn create_credentials_client(root_url: &str, auth: Option<JenkinsAuth>) -> CredentialsClient {
  let augmenter_transport = Arc::new(ReqwestTransport::new(auth.clone()));

  CredentialsClient::new(root_url, Some(Arc::new(ReqwestTransport::new(auth))))
    .with_augmenter(Arc::new(ClassesAugmenter::new(root_url, augmenter_transport)))
}

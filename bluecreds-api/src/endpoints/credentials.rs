//! # Credential Endpoints
//!
//! Listing credentials through the search API and creating them in the
//! system store's default domain.
//!
//! Each operation makes exactly one transport call of its own. Errors from
//! the transport or the augmenter are returned as they are, without extra
//! context, so callers see the original failure.

use anyhow::Result;
use bluecreds_core::clean_slashes;
use serde_json::Value;
use tracing::{debug, info};

use crate::client::CredentialsClient;
use crate::consts::{CREATE_CREDENTIAL_PATH, SEARCH_CREDENTIALS_PATH};
use crate::models::{CreateCredentialRequest, CredentialPayload};
use crate::transport::RequestOptions;

impl CredentialsClient {
  /// List every credential visible to the caller, augmented with
  /// capability metadata
  pub async fn list_all_credentials(&self) -> Result<Value> {
    let url = clean_slashes(&format!("{}{}", self.root_url, SEARCH_CREDENTIALS_PATH), false);
    debug!(url = %url, "Listing credentials");

    let data = self.transport.request(&url, RequestOptions::default()).await?;
    self.augmenter.augment_capabilities(data).await
  }

  /// Create a username/password credential
  pub async fn save_username_password_credential(&self, username: &str, password: &str) -> Result<Value> {
    self
      .save_credential(&CredentialPayload::username_password(username, password))
      .await
  }

  /// Create an SSH private key credential from key material
  pub async fn save_ssh_key_credential(&self, private_key: &str) -> Result<Value> {
    self.save_credential(&CredentialPayload::ssh_private_key(private_key)).await
  }

  /// Create any credential payload in the default domain
  ///
  /// The server's response is returned undecoded beyond JSON parsing. Saving
  /// the same payload twice creates two credentials.
  pub async fn save_credential(&self, payload: &CredentialPayload) -> Result<Value> {
    let url = clean_slashes(&format!("{}{}", self.root_url, CREATE_CREDENTIAL_PATH), true);
    let options = RequestOptions::post_json(&CreateCredentialRequest { credentials: payload })?;
    info!(url = %url, class = payload.class_name(), "Creating credential");

    self.transport.request(&url, options).await
  }
}

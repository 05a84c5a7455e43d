//! # Blue Ocean Credentials API Client
//!
//! Lists and creates credentials stored on a Jenkins server through the Blue
//! Ocean REST API. The HTTP layer sits behind the [`Transport`] trait and the
//! capability metadata lookup behind [`CapabilityAugmenter`], so both can be
//! swapped out in tests or by embedding applications.

pub mod augment;
mod client;
pub mod consts;
mod endpoints;
pub mod models;
pub mod transport;

#[cfg(test)]
mod testing;

// Re-export the client
pub use augment::{CapabilityAugmenter, ClassesAugmenter, NoopAugmenter};
pub use client::{CredentialsClient, create_credentials_client};
// Re-export models
pub use models::{
  CreateCredentialRequest, CredentialPayload, CredentialSummary, JenkinsAuth, SshPrivateKeyCredential,
  UsernamePasswordCredential,
};
pub use transport::{ReqwestTransport, RequestOptions, Transport, TransportError};

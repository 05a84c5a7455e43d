//! # Credential Lookup
//!
//! Basic-auth credentials for the Jenkins server itself (a user name and an
//! API token), discovered from the user's `.netrc` file.

use std::fmt;

pub mod netrc;

/// A user name and password or API token for a Jenkins server
#[derive(Clone)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("username", &self.username)
      .field("password", &"[REDACTED]")
      .finish()
  }
}

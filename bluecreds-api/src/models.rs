use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::consts::{DIRECT_ENTRY_PRIVATE_KEY_SOURCE_CLASS, SSH_PRIVATE_KEY_CLASS, USERNAME_PASSWORD_CLASS};

/// Represents Jenkins basic-auth credentials (user name and API token)
#[derive(Clone)]
pub struct JenkinsAuth {
  pub username: String,
  pub api_token: String,
}

impl fmt::Debug for JenkinsAuth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("JenkinsAuth")
      .field("username", &self.username)
      .field("api_token", &"[REDACTED]")
      .finish()
  }
}

/// A credential to be created on the server
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialPayload {
  UsernamePassword(UsernamePasswordCredential),
  SshPrivateKey(SshPrivateKeyCredential),
}

impl CredentialPayload {
  /// Username and password with no scope or description
  pub fn username_password(username: &str, password: &str) -> Self {
    Self::UsernamePassword(UsernamePasswordCredential {
      username: username.to_string(),
      password: password.to_string(),
      scope: None,
      description: None,
    })
  }

  /// Directly entered SSH private key with no passphrase, user name, scope or
  /// description
  pub fn ssh_private_key(private_key: &str) -> Self {
    Self::SshPrivateKey(SshPrivateKeyCredential {
      private_key: private_key.to_string(),
      passphrase: None,
      scope: None,
      description: None,
      username: None,
    })
  }

  /// Jenkins class the server binds this payload to
  pub const fn class_name(&self) -> &'static str {
    match self {
      Self::UsernamePassword(_) => USERNAME_PASSWORD_CLASS,
      Self::SshPrivateKey(_) => SSH_PRIVATE_KEY_CLASS,
    }
  }
}

impl fmt::Debug for CredentialPayload {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UsernamePassword(credential) => fmt::Debug::fmt(credential, f),
      Self::SshPrivateKey(credential) => fmt::Debug::fmt(credential, f),
    }
  }
}

impl Serialize for CredentialPayload {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::UsernamePassword(credential) => credential.serialize(serializer),
      Self::SshPrivateKey(credential) => credential.serialize(serializer),
    }
  }
}

/// Username with password
#[derive(Clone, PartialEq, Eq)]
pub struct UsernamePasswordCredential {
  pub username: String,
  pub password: String,
  pub scope: Option<String>,
  pub description: Option<String>,
}

impl fmt::Debug for UsernamePasswordCredential {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("UsernamePasswordCredential")
      .field("username", &self.username)
      .field("password", &"[REDACTED]")
      .field("scope", &self.scope)
      .field("description", &self.description)
      .finish()
  }
}

impl Serialize for UsernamePasswordCredential {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(6))?;
    map.serialize_entry("$class", USERNAME_PASSWORD_CLASS)?;
    map.serialize_entry("stapler-class", USERNAME_PASSWORD_CLASS)?;
    map.serialize_entry("scope", &self.scope)?;
    map.serialize_entry("username", &self.username)?;
    map.serialize_entry("password", &self.password)?;
    map.serialize_entry("description", &self.description)?;
    map.end()
  }
}

/// SSH username with a directly entered private key
#[derive(Clone, PartialEq, Eq)]
pub struct SshPrivateKeyCredential {
  pub private_key: String,
  pub passphrase: Option<String>,
  pub scope: Option<String>,
  pub description: Option<String>,
  pub username: Option<String>,
}

impl fmt::Debug for SshPrivateKeyCredential {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SshPrivateKeyCredential")
      .field("private_key", &"[REDACTED]")
      .field("passphrase", &self.passphrase.as_ref().map(|_| "[REDACTED]"))
      .field("scope", &self.scope)
      .field("description", &self.description)
      .field("username", &self.username)
      .finish()
  }
}

impl Serialize for SshPrivateKeyCredential {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(6))?;
    map.serialize_entry("$class", SSH_PRIVATE_KEY_CLASS)?;
    map.serialize_entry("passphrase", &self.passphrase)?;
    map.serialize_entry("scope", &self.scope)?;
    map.serialize_entry("description", &self.description)?;
    map.serialize_entry("username", &self.username)?;
    map.serialize_entry(
      "privateKeySource",
      &DirectEntryPrivateKeySource {
        private_key: &self.private_key,
      },
    )?;
    map.end()
  }
}

/// Nested `privateKeySource` object of an SSH key payload
struct DirectEntryPrivateKeySource<'a> {
  private_key: &'a str,
}

impl Serialize for DirectEntryPrivateKeySource<'_> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(2))?;
    map.serialize_entry("privateKey", self.private_key)?;
    map.serialize_entry("stapler-class", DIRECT_ENTRY_PRIVATE_KEY_SOURCE_CLASS)?;
    map.end()
  }
}

/// Represents a credential creation request body
#[derive(Debug, Serialize)]
pub struct CreateCredentialRequest<'a> {
  pub credentials: &'a CredentialPayload,
}

/// Display view over one item of a credential search result
///
/// Search results are otherwise treated as opaque JSON; this view only picks
/// out the fields worth showing and never fails on unexpected shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialSummary {
  pub id: Option<String>,
  pub display_name: Option<String>,
  pub type_name: Option<String>,
  pub description: Option<String>,
  pub domain: Option<String>,
  pub capabilities: Vec<String>,
}

impl CredentialSummary {
  /// Read the summary fields out of a single search result item
  pub fn from_value(value: &Value) -> Self {
    let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

    let capabilities = value
      .get("_capabilities")
      .and_then(Value::as_array)
      .map(|classes| classes.iter().filter_map(Value::as_str).map(str::to_string).collect())
      .unwrap_or_default();

    Self {
      id: text("id"),
      display_name: text("displayName"),
      type_name: text("typeName"),
      description: text("description"),
      domain: text("domain"),
      capabilities,
    }
  }

  /// Summaries for every item of a search result; anything but an array
  /// yields an empty list
  pub fn list_from_value(value: &Value) -> Vec<Self> {
    value
      .as_array()
      .map(|items| items.iter().map(Self::from_value).collect())
      .unwrap_or_default()
  }
}

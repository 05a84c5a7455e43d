//! Constants for the Blue Ocean credentials client.
//!
//! The `*_CLASS` values are Jenkins class names the server uses to pick the
//! credential implementation a JSON payload is bound to. They must be sent
//! verbatim.

/// User-Agent header value for the credentials API client
pub const USER_AGENT: &str = concat!("bluecreds/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Media type for JSON request bodies
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Search for every credential visible to the caller, relative to the root URL
pub const SEARCH_CREDENTIALS_PATH: &str = "/blue/rest/search?q=type:credential";

/// Credential creation endpoint in the system store's default (`_`) domain
pub const CREATE_CREDENTIAL_PATH: &str = "/blue/rest/organizations/jenkins/credentials/system/domains/_/credentials/";

/// Class metadata lookup used for capability augmentation
pub const CLASSES_PATH: &str = "/blue/rest/classes/";

/// Username with password credential
pub const USERNAME_PASSWORD_CLASS: &str = "com.cloudbees.plugins.credentials.impl.UsernamePasswordCredentialsImpl";

/// SSH username with private key credential
pub const SSH_PRIVATE_KEY_CLASS: &str = "com.cloudbees.jenkins.plugins.sshcredentials.impl.BasicSSHUserPrivateKey";

/// Private key source holding the key material inline
pub const DIRECT_ENTRY_PRIVATE_KEY_SOURCE_CLASS: &str =
  "com.cloudbees.jenkins.plugins.sshcredentials.impl.BasicSSHUserPrivateKey$DirectEntryPrivateKeySource";

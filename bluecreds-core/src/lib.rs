//! # bluecreds Core Library
//!
//! Helpers shared by the credentials API client and the command-line tool:
//! Jenkins root URL resolution and path normalization, `.netrc` credential
//! lookup, and styled terminal output.

pub mod creds;
pub mod output;
pub mod url;

pub use creds::Credentials;
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
pub use url::{ENV_JENKINS_URL, clean_slashes, ensure_url_scheme, resolve_jenkins_root_url};

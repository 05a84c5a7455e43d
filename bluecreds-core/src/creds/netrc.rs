//! Helpers for reading Jenkins credentials stored in `.netrc` files.
//!
//! Entries are keyed by `host[:port]` of the Jenkins root URL, so a server at
//! `http://localhost:8080/jenkins` is looked up under `machine localhost:8080`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::creds::Credentials;
use crate::url::machine_for_url;

/// Returns the path to the `.netrc` file for the provided home directory.
///
/// ```
/// use std::path::Path;
/// use bluecreds_core::creds::netrc::get_netrc_path;
///
/// let home = Path::new("/home/user");
/// assert_eq!(get_netrc_path(home), Path::new("/home/user/.netrc"));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Parses a `.netrc` file and returns credentials for the requested machine.
///
/// Both single-line (`machine host login user password pass`) and multi-line
/// layouts are accepted. A missing machine, or one without both `login` and
/// `password`, yields `Ok(None)`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
  let reader = BufReader::new(file);

  let mut in_target = false;
  let mut username: Option<String> = None;
  let mut password: Option<String> = None;

  'lines: for line in reader.lines() {
    let line = line.context("Failed to read line from .netrc")?;
    let mut tokens = line.split_whitespace();

    while let Some(token) = tokens.next() {
      match token {
        // The target entry ends where the next one begins
        "machine" | "default" if in_target => break 'lines,
        "machine" => in_target = tokens.next() == Some(target_machine),
        "login" if in_target => username = tokens.next().map(str::to_string),
        "password" if in_target => password = tokens.next().map(str::to_string),
        _ => {}
      }
    }
  }

  match (username, password) {
    (Some(username), Some(password)) => Ok(Some(Credentials { username, password })),
    _ => Ok(None),
  }
}

/// Look up credentials for the Jenkins server at `root_url`.
///
/// A missing `.netrc` file is not an error: the server is then contacted
/// anonymously.
pub fn lookup_credentials(home: &Path, root_url: &str) -> Result<Option<Credentials>> {
  let netrc_path = get_netrc_path(home);
  if !netrc_path.exists() {
    debug!("No .netrc file at {}", netrc_path.display());
    return Ok(None);
  }

  let machine = machine_for_url(root_url)?;
  let creds = parse_netrc_file(&netrc_path, &machine)?;
  debug!(machine = %machine, found = creds.is_some(), "Looked up .netrc credentials");
  Ok(creds)
}

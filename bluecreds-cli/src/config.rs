//! # Connection Configuration
//!
//! Resolves the Jenkins root URL and the credentials to authenticate with
//! from command-line flags, the environment and `~/.netrc`.

use std::path::Path;

use anyhow::{Context, Result};
use bluecreds_api::JenkinsAuth;
use bluecreds_core::creds::netrc::lookup_credentials;
use bluecreds_core::{ensure_url_scheme, resolve_jenkins_root_url};
use directories::BaseDirs;
use tracing::{debug, warn};

use crate::cli::ConnectionArgs;

/// Everything needed to build a credentials client
#[derive(Debug)]
pub struct ClientConfig {
  pub root_url: String,
  pub auth: Option<JenkinsAuth>,
  pub capabilities: bool,
}

/// Resolve the client configuration using the current user's home directory
pub fn resolve_client_config(args: &ConnectionArgs) -> Result<ClientConfig> {
  let base_dirs = BaseDirs::new();
  if base_dirs.is_none() {
    warn!("Could not determine home directory; .netrc lookup skipped");
  }
  resolve_client_config_with_home(args, base_dirs.as_ref().map(BaseDirs::home_dir))
}

/// Resolve the client configuration, reading `.netrc` from `home` when no
/// credentials were given on the command line
pub(crate) fn resolve_client_config_with_home(args: &ConnectionArgs, home: Option<&Path>) -> Result<ClientConfig> {
  let root_url = match &args.url {
    Some(url) => ensure_url_scheme(url)?,
    None => resolve_jenkins_root_url().context("No Jenkins URL given; pass --url or set JENKINS_URL")?,
  };

  let auth = match (&args.user, &args.token) {
    (Some(username), Some(api_token)) => Some(JenkinsAuth {
      username: username.clone(),
      api_token: api_token.clone(),
    }),
    (Some(_), None) | (None, Some(_)) => {
      return Err(anyhow::anyhow!("Both --user and --token are required to authenticate"));
    }
    (None, None) => match home {
      Some(home) => lookup_credentials(home, &root_url)?.map(|creds| JenkinsAuth {
        username: creds.username,
        api_token: creds.password,
      }),
      None => None,
    },
  };

  if auth.is_none() {
    debug!("No credentials found for {root_url}; requests will be anonymous");
  }

  Ok(ClientConfig {
    root_url,
    auth,
    capabilities: !args.no_capabilities,
  })
}

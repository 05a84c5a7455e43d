//! URL helpers for talking to a Jenkins server.
//!
//! These live in `bluecreds-core` so both the API client and the CLI can
//! build endpoint URLs without depending on a client instance.

use anyhow::Result;
use tracing::debug;
use url::{Position, Url};

/// Environment variable holding the Jenkins root URL.
pub const ENV_JENKINS_URL: &str = "JENKINS_URL";

/// Read `$JENKINS_URL` and return it with a proper URL scheme.
///
/// If the value doesn't include a scheme (http:// or https://), assumes
/// https://. Returns an error if the environment variable is not set.
pub fn resolve_jenkins_root_url() -> Result<String> {
  match std::env::var(ENV_JENKINS_URL) {
    Ok(root) => ensure_url_scheme(&root),
    Err(_) => Err(anyhow::anyhow!(
      "Jenkins URL environment variable '{ENV_JENKINS_URL}' not set"
    )),
  }
}

/// Collapse repeated `/` separators in the path portion of `url`.
///
/// The `scheme://` separator and anything from the first `?` or `#` onward
/// are left untouched. When `ensure_trailing_slash` is set and the URL carries
/// no query or fragment, exactly one trailing `/` is guaranteed.
///
/// ```
/// use bluecreds_core::clean_slashes;
///
/// assert_eq!(
///   clean_slashes("http://ci.example.com//blue/rest/search?q=type:credential", false),
///   "http://ci.example.com/blue/rest/search?q=type:credential"
/// );
/// assert_eq!(clean_slashes("http://ci.example.com/a//b", true), "http://ci.example.com/a/b/");
/// ```
pub fn clean_slashes(url: &str, ensure_trailing_slash: bool) -> String {
  let (prefix, rest) = match url.find("://") {
    Some(idx) => url.split_at(idx + 3),
    None => ("", url),
  };
  let (path, tail) = match rest.find(['?', '#']) {
    Some(idx) => rest.split_at(idx),
    None => (rest, ""),
  };

  let mut cleaned = String::with_capacity(url.len() + 1);
  cleaned.push_str(prefix);

  // Slashes directly after the scheme separator would produce an empty host.
  let mut previous_slash = !prefix.is_empty();
  for ch in path.chars() {
    if ch == '/' {
      if previous_slash {
        continue;
      }
      previous_slash = true;
    } else {
      previous_slash = false;
    }
    cleaned.push(ch);
  }

  if ensure_trailing_slash && tail.is_empty() && !cleaned.ends_with('/') {
    cleaned.push('/');
  }
  cleaned.push_str(tail);

  if cleaned != url {
    debug!("Normalized URL {url} to {cleaned}");
  }
  cleaned
}

/// Render a parsed URL, dropping the path when it is just "/".
fn normalize_url(url: &Url) -> String {
  let mut result = String::new();
  result.push_str(&url[..Position::BeforePath]);

  let path = url.path();
  if path != "/" {
    result.push_str(path);
  }

  if let Some(query) = url.query() {
    result.push('?');
    result.push_str(query);
  }

  if let Some(fragment) = url.fragment() {
    result.push('#');
    result.push_str(fragment);
  }

  result
}

/// Parse `input` as a URL after forcing an https:// scheme onto it.
fn parse_with_https_prefix(input: &str) -> Result<Url> {
  let with_scheme = format!("https://{input}");
  Url::parse(&with_scheme).map_err(|e| anyhow::anyhow!("Failed to parse URL '{input}': {e}"))
}

/// Ensure a Jenkins URL has a proper scheme (http:// or https://).
///
/// A bare host (optionally with port and path) gets https://. Malformed
/// schemes like "http:/ci.example.com" are repaired to https://. A lone "/"
/// path is dropped so the result can be joined with absolute API paths.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Jenkins URL cannot be empty"));
  }

  let lowered = trimmed.to_ascii_lowercase();
  for scheme in ["http:", "https:"] {
    if lowered.starts_with(scheme) && !lowered.starts_with(&format!("{scheme}//")) {
      let remainder = &trimmed[scheme.len()..];
      return parse_with_https_prefix(remainder.trim_start_matches('/')).map(|url| normalize_url(&url));
    }
  }

  let url = match Url::parse(trimmed) {
    Ok(url) if url.scheme().len() > 1 && url.host().is_some() => url,
    _ => parse_with_https_prefix(trimmed)?,
  };

  Ok(normalize_url(&url))
}

/// Return the `host[:port]` of a URL, the name `.netrc` entries are keyed by.
pub fn machine_for_url(input: &str) -> Result<String> {
  let url = Url::parse(input).map_err(|e| anyhow::anyhow!("Failed to parse URL '{input}': {e}"))?;
  let host = url
    .host_str()
    .ok_or_else(|| anyhow::anyhow!("URL '{input}' has no host"))?;

  Ok(match url.port() {
    Some(port) => format!("{host}:{port}"),
    None => host.to_string(),
  })
}

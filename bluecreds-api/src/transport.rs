//! # HTTP Transport
//!
//! The seam between the credentials client and the network. Every request
//! the client makes goes through [`Transport::request`], which takes a URL
//! plus fetch-style options and resolves to the decoded JSON response.

use std::fmt;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::consts::{CONTENT_TYPE_JSON, USER_AGENT};
use crate::models::JenkinsAuth;

/// Method, headers and body of a single request
///
/// A `None` method means GET. The body is already encoded.
#[derive(Clone, Default)]
pub struct RequestOptions {
  pub method: Option<Method>,
  pub headers: Vec<(String, String)>,
  pub body: Option<String>,
}

impl RequestOptions {
  /// A POST carrying `body` encoded as JSON with a matching `Content-Type`
  pub fn post_json<T: Serialize>(body: &T) -> Result<Self> {
    let body = serde_json::to_string(body).context("Failed to encode request body")?;

    Ok(Self {
      method: Some(Method::POST),
      headers: vec![("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string())],
      body: Some(body),
    })
  }

  /// The effective HTTP method
  pub fn method(&self) -> Method {
    self.method.clone().unwrap_or(Method::GET)
  }

  /// Value of the first header named `name`, compared case-insensitively
  pub fn header(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(key, _)| key.eq_ignore_ascii_case(name))
      .map(|(_, value)| value.as_str())
  }
}

// Bodies carry passwords and private keys, so only their size is shown.
impl fmt::Debug for RequestOptions {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RequestOptions")
      .field("method", &self.method)
      .field("headers", &self.headers)
      .field("body", &self.body.as_ref().map(|body| format!("<{} bytes>", body.len())))
      .finish()
  }
}

/// Failures derived from the HTTP status of a response
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
  #[error("Authentication failed. Please check your Jenkins credentials.")]
  Unauthorized { status: StatusCode },
  #[error("Resource {url} not found")]
  NotFound { url: String },
  #[error("Unexpected error: HTTP {status} - {body}")]
  Status { status: StatusCode, body: String },
}

/// Issues one HTTP request and decodes its JSON response
#[async_trait]
pub trait Transport: Send + Sync {
  async fn request(&self, url: &str, options: RequestOptions) -> Result<Value>;
}

/// Default [`Transport`] backed by `reqwest`
///
/// Non-success statuses become [`TransportError`]s; an empty success body
/// decodes to `Value::Null`.
pub struct ReqwestTransport {
  client: Client,
  auth: Option<JenkinsAuth>,
}

impl ReqwestTransport {
  /// Create a transport, authenticating every request when `auth` is given
  pub fn new(auth: Option<JenkinsAuth>) -> Self {
    Self {
      client: Client::new(),
      auth,
    }
  }
}

#[async_trait]
impl Transport for ReqwestTransport {
  async fn request(&self, url: &str, options: RequestOptions) -> Result<Value> {
    let method = options.method();
    debug!(%method, url, "Sending request");

    let mut request = self
      .client
      .request(method.clone(), url)
      .header("Accept", CONTENT_TYPE_JSON)
      .header("User-Agent", USER_AGENT);

    for (name, value) in &options.headers {
      request = request.header(name.as_str(), value.as_str());
    }

    if let Some(auth) = &self.auth {
      request = request.basic_auth(&auth.username, Some(&auth.api_token));
    }

    if let Some(body) = options.body {
      request = request.body(body);
    }

    let response = request
      .send()
      .await
      .with_context(|| format!("Failed to send {method} request to {url}"))?;

    let status = response.status();
    debug!(%status, url, "Received response");

    if status.is_success() {
      let text = response.text().await.context("Failed to read response body")?;
      if text.trim().is_empty() {
        return Ok(Value::Null);
      }
      return serde_json::from_str(&text).context("Failed to parse JSON response");
    }

    debug!(%status, url, "Request failed");
    let error = match status {
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TransportError::Unauthorized { status },
      StatusCode::NOT_FOUND => TransportError::NotFound { url: url.to_string() },
      _ => TransportError::Status {
        status,
        body: error_body(response.text().await),
      },
    };
    Err(error.into())
  }
}

/// Body of a failed response, or a note saying why it could not be read
fn error_body<E: fmt::Display>(body: std::result::Result<String, E>) -> String {
  match body {
    Ok(body) => body,
    Err(e) => {
      debug!("Failed to read error response body: {e}");
      format!("<unreadable response body: {e}>")
    }
  }
}

//! In-memory doubles for the transport and augmentation seams.

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Value, json};

use crate::augment::CapabilityAugmenter;
use crate::transport::{RequestOptions, Transport};

/// One call observed by [`RecordingTransport`]
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
  pub(crate) url: String,
  pub(crate) options: RequestOptions,
}

impl RecordedCall {
  /// The request body decoded as JSON
  pub(crate) fn body_json(&self) -> Value {
    let body = self.options.body.as_deref().expect("request has no body");
    serde_json::from_str(body).expect("request body is not JSON")
  }
}

/// The error [`RecordingTransport::failing`] hands back
#[derive(Debug, thiserror::Error)]
#[error("connection reset by peer")]
pub(crate) struct ConnectionReset;

type Responder = Box<dyn Fn() -> Result<Value> + Send + Sync>;

/// Records every request and answers each with the same canned outcome
pub(crate) struct RecordingTransport {
  calls: Mutex<Vec<RecordedCall>>,
  respond: Responder,
}

impl RecordingTransport {
  pub(crate) fn returning(value: Value) -> Self {
    Self {
      calls: Mutex::new(Vec::new()),
      respond: Box::new(move || Ok(value.clone())),
    }
  }

  pub(crate) fn failing() -> Self {
    Self {
      calls: Mutex::new(Vec::new()),
      respond: Box::new(|| Err(ConnectionReset.into())),
    }
  }

  pub(crate) fn calls(&self) -> Vec<RecordedCall> {
    self.calls.lock().expect("calls lock poisoned").clone()
  }
}

#[async_trait]
impl Transport for RecordingTransport {
  async fn request(&self, url: &str, options: RequestOptions) -> Result<Value> {
    self.calls.lock().expect("calls lock poisoned").push(RecordedCall {
      url: url.to_string(),
      options,
    });
    (self.respond)()
  }
}

/// Wraps whatever it receives so tests can tell augmented output apart
#[derive(Default)]
pub(crate) struct WrappingAugmenter {
  seen: Mutex<Vec<Value>>,
}

impl WrappingAugmenter {
  pub(crate) fn seen(&self) -> Vec<Value> {
    self.seen.lock().expect("seen lock poisoned").clone()
  }
}

#[async_trait]
impl CapabilityAugmenter for WrappingAugmenter {
  async fn augment_capabilities(&self, data: Value) -> Result<Value> {
    self.seen.lock().expect("seen lock poisoned").push(data.clone());
    Ok(json!({ "augmented": data }))
  }
}

/// An augmenter that always fails
pub(crate) struct FailingAugmenter;

#[async_trait]
impl CapabilityAugmenter for FailingAugmenter {
  async fn augment_capabilities(&self, _data: Value) -> Result<Value> {
    Err(ConnectionReset.into())
  }
}

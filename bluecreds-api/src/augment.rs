//! # Capability Augmentation
//!
//! Blue Ocean tags every REST object with its Jenkins `_class`. Clients that
//! need to know what an object *is* ask the server which classes and
//! interfaces that class implements, and attach the answer to the object as
//! `_capabilities`.

use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use bluecreds_core::clean_slashes;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::consts::CLASSES_PATH;
use crate::transport::{RequestOptions, Transport};

/// Post-processes search results before they reach the caller
#[async_trait]
pub trait CapabilityAugmenter: Send + Sync {
  async fn augment_capabilities(&self, data: Value) -> Result<Value>;
}

/// Returns results untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAugmenter;

#[async_trait]
impl CapabilityAugmenter for NoopAugmenter {
  async fn augment_capabilities(&self, data: Value) -> Result<Value> {
    Ok(data)
  }
}

/// Resolves `_class` names through the server's class metadata endpoint
pub struct ClassesAugmenter {
  root_url: String,
  transport: Arc<dyn Transport>,
}

impl ClassesAugmenter {
  pub fn new(root_url: &str, transport: Arc<dyn Transport>) -> Self {
    Self {
      root_url: root_url.to_string(),
      transport,
    }
  }
}

#[async_trait]
impl CapabilityAugmenter for ClassesAugmenter {
  async fn augment_capabilities(&self, mut data: Value) -> Result<Value> {
    let mut classes = BTreeSet::new();
    collect_classes(&data, &mut classes);
    if classes.is_empty() {
      return Ok(data);
    }

    debug!(count = classes.len(), "Fetching capabilities");
    let url = clean_slashes(&format!("{}{}", self.root_url, CLASSES_PATH), true);
    let options = RequestOptions::post_json(&json!({ "q": classes }))?;
    let response = self.transport.request(&url, options).await?;

    let class_map = response
      .get("map")
      .and_then(Value::as_object)
      .ok_or_else(|| anyhow::anyhow!("Class metadata response from {url} has no 'map' object"))?;

    apply_capabilities(&mut data, class_map);
    Ok(data)
  }
}

/// Gather every distinct `_class` string anywhere in `value`.
fn collect_classes(value: &Value, classes: &mut BTreeSet<String>) {
  match value {
    Value::Object(object) => {
      if let Some(class) = object.get("_class").and_then(Value::as_str) {
        classes.insert(class.to_string());
      }
      for child in object.values() {
        collect_classes(child, classes);
      }
    }
    Value::Array(items) => {
      for item in items {
        collect_classes(item, classes);
      }
    }
    _ => {}
  }
}

/// Set `_capabilities` on every object carrying a `_class`. Classes the
/// server did not describe get an empty list.
fn apply_capabilities(value: &mut Value, class_map: &Map<String, Value>) {
  match value {
    Value::Object(object) => {
      for child in object.values_mut() {
        apply_capabilities(child, class_map);
      }

      let capabilities = object.get("_class").and_then(Value::as_str).map(|class| {
        class_map
          .get(class)
          .and_then(|entry| entry.get("classes"))
          .filter(|classes| classes.is_array())
          .cloned()
          .unwrap_or_else(|| Value::Array(Vec::new()))
      });

      if let Some(capabilities) = capabilities {
        object.insert("_capabilities".to_string(), capabilities);
      }
    }
    Value::Array(items) => {
      for item in items {
        apply_capabilities(item, class_map);
      }
    }
    _ => {}
  }
}

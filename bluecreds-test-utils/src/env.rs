//! Environment variable management for testing
//!
//! [`EnvVarGuard`] snapshots a single variable, lets the test set or remove
//! it, and restores the original value when dropped.

use std::env;
use std::sync::{Mutex, MutexGuard};

/// Serializes every test that touches process environment (including HOME).
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Acquire the process-wide environment lock, ignoring poisoning left behind
/// by a test that panicked while holding it.
pub(crate) fn lock_env() -> MutexGuard<'static, ()> {
  ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// RAII guard for a single environment variable
pub struct EnvVarGuard {
  name: String,
  original: Option<String>,
  _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
  /// Snapshot `name` and take the environment lock
  pub fn new(name: &str) -> Self {
    let lock = lock_env();
    let original = env::var(name).ok();

    Self {
      name: name.to_string(),
      original,
      _lock: lock,
    }
  }

  /// Set the variable for the lifetime of the guard
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  /// Remove the variable for the lifetime of the guard
  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(&self.name, val);
      },
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_env_var_guard_restores_original_value() {
    let name = "BLUECREDS_TEST_UTILS_RESTORE";
    unsafe {
      env::set_var(name, "original");
    }

    {
      let guard = EnvVarGuard::new(name);
      guard.set("overridden");
      assert_eq!(env::var(name).unwrap(), "overridden");
    }

    assert_eq!(env::var(name).unwrap(), "original");
    unsafe {
      env::remove_var(name);
    }
  }

  #[test]
  fn test_env_var_guard_removes_unset_variable() {
    let name = "BLUECREDS_TEST_UTILS_UNSET";

    {
      let guard = EnvVarGuard::new(name);
      guard.remove();
      guard.set("temporary");
      assert_eq!(env::var(name).unwrap(), "temporary");
    }

    assert!(env::var(name).is_err());
  }
}

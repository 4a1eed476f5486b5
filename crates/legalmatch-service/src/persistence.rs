//! Typed JSON access to a [`KeyValueStore`].
//!
//! Failures never reach the caller. A failed write is logged and leaves the
//! previous value in place; a failed or unparseable read is logged and yields
//! the caller's default.

use std::sync::Arc;

use legalmatch_core::store::KeyValueStore;
use serde::{Serialize, de::DeserializeOwned};

/// Sequence of client cases written by case submission.
pub const SUBMITTED_CASES_KEY: &str = "submittedCases";
/// Sequence of drafted documents.
pub const DOCUMENTS_KEY: &str = "legalDraftDocuments";
/// At most one logged-in identity.
pub const SESSION_KEY: &str = "legalMatchUser";

pub struct Persistence<S> {
  store: Arc<S>,
}

impl<S> Clone for Persistence<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: KeyValueStore> Persistence<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub fn backend(&self) -> &Arc<S> { &self.store }

  /// Serialise `value` and overwrite `key` with it.
  pub async fn store<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
    let json = match serde_json::to_string(value) {
      Ok(json) => json,
      Err(e) => {
        tracing::warn!(key, error = %e, "failed to serialise value; store unchanged");
        return;
      }
    };
    if let Err(e) = self.store.set(key, json).await {
      tracing::warn!(key, error = %e, "failed to write value; store unchanged");
    }
  }

  /// Read and deserialise `key`, falling back to `default` when the key is
  /// absent, unreadable or not valid JSON for `T`.
  pub async fn retrieve<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
    let raw = match self.store.get(key).await {
      Ok(Some(raw)) => raw,
      Ok(None) => return default,
      Err(e) => {
        tracing::warn!(key, error = %e, "failed to read value; using default");
        return default;
      }
    };
    match serde_json::from_str(&raw) {
      Ok(value) => value,
      Err(e) => {
        tracing::warn!(key, error = %e, "stored value is not parseable; using default");
        default
      }
    }
  }

  /// Delete `key`. Failures are logged.
  pub async fn remove(&self, key: &str) {
    if let Err(e) = self.store.remove(key).await {
      tracing::warn!(key, error = %e, "failed to remove value");
    }
  }
}

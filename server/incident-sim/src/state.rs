//! Shared application state.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::registry::Registry;

/// One registry per process behind a single lock. Ingest is a find-or-create
/// read-modify-write: lookup and insert must happen under the same guard or
/// two concurrent events with the same unseen dedup key would both create an
/// incident.
pub struct AppState {
  registry: Mutex<Registry>,
}

impl AppState {
  pub fn new() -> Self {
    Self {
      registry: Mutex::new(Registry::new()),
    }
  }

  /// Lock the registry. A poisoned lock only means some handler panicked;
  /// the registry holds plain values and stays usable.
  pub fn registry(&self) -> MutexGuard<'_, Registry> {
    self.registry.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl Default for AppState {
  fn default() -> Self {
    Self::new()
  }
}

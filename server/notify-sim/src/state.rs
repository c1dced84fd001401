//! Shared application state.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::inbox::Inbox;

/// One inbox per process behind a single lock.
pub struct AppState {
  inbox: Mutex<Inbox>,
}

impl AppState {
  pub fn new() -> Self {
    Self {
      inbox: Mutex::new(Inbox::new()),
    }
  }

  /// Lock the inbox. A poisoned lock only means some handler panicked; the
  /// inbox holds plain values and stays usable.
  pub fn inbox(&self) -> MutexGuard<'_, Inbox> {
    self.inbox.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl Default for AppState {
  fn default() -> Self {
    Self::new()
  }
}

//! Shared application state.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::desk::TicketDesk;

/// One ticket desk per process behind a single lock; key allocation and
/// insert are a single read-modify-write.
pub struct AppState {
  desk: Mutex<TicketDesk>,
}

impl AppState {
  pub fn new(base_url: String) -> Self {
    Self {
      desk: Mutex::new(TicketDesk::new(base_url)),
    }
  }

  /// Lock the desk. A poisoned lock only means some handler panicked; the
  /// desk holds plain values and stays usable.
  pub fn desk(&self) -> MutexGuard<'_, TicketDesk> {
    self.desk.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

//! View models owning fetch orchestration and published state for one
//! screen's worth of data.

pub mod profile;
pub mod published;
pub mod purchases;

pub use profile::UserProfileViewModel;
pub use published::Published;
pub use purchases::UserPurchasesViewModel;

use std::sync::{Mutex, PoisonError};
use tokio::task::AbortHandle;

/// Handles for in-flight fetch tasks. Dropping the container aborts every
/// task still running, so a torn-down view model can never be written to by
/// an orphaned fetch.
pub(crate) struct Cancellables {
    handles: Mutex<Vec<AbortHandle>>,
}

impl Cancellables {
    pub(crate) fn new() -> Self {
        Self {
            handles: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn store(&self, handle: AbortHandle) {
        let mut handles = self.handles.lock().unwrap_or_else(PoisonError::into_inner);
        handles.retain(|existing| !existing.is_finished());
        handles.push(handle);
    }
}

impl Drop for Cancellables {
    fn drop(&mut self) {
        let handles = self.handles.get_mut().unwrap_or_else(PoisonError::into_inner);
        for handle in handles.drain(..) {
            handle.abort();
        }
    }
}

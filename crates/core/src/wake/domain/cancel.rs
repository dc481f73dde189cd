use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Single-slot cancellation signal shared between a running detection
/// loop and any other thread.
///
/// A plain flag: set once, observed eventually. `Relaxed` ordering is
/// enough because there is one flag and one consuming loop; no ordering
/// across multiple locations is needed.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent; a no-op when nothing observes
    /// the token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Observe and consume a pending cancellation, so one request stops
    /// exactly one detection pass.
    pub(crate) fn take(&self) -> bool {
        self.flag.swap(false, Ordering::Relaxed)
    }
}

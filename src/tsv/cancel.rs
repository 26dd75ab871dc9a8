use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation signal polled by the engine once per
/// successfully parsed row.
pub trait Cancellation {
    fn is_cancelled(&self) -> bool;
}

/// A cancellation token that never fires.
///
/// Used by callers that run an import to completion unconditionally.
pub struct Never;

impl Cancellation for Never {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// A shareable cancellation flag.
///
/// Clone it into whatever context supervises the import and call
/// [`CancelFlag::cancel`] to stop the run after the row currently being
/// parsed.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Takes effect at the next per-row poll.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

impl Cancellation for CancelFlag {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Flag checked before every move.
///
/// Clones share the same flag, so one handle can be given to a solver
/// running on another thread while the caller keeps another to cancel it.
/// Cancelling takes effect at the solver's next check; moves already
/// applied stay applied.
///
/// # Example
///
/// ```rust
/// use hanoi::solver::StopSignal;
///
/// let signal = StopSignal::new();
/// let handle = signal.clone();
///
/// assert!(!signal.is_cancelled());
/// handle.cancel();
/// assert!(signal.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StopSignal {
    flag: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that solving stops before its next move.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

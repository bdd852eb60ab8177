//! Single-slot cancellable timer.
//!
//! The core never reads a clock. Timers store an absolute deadline computed
//! from the caller-supplied `now_ms`, and the caller polls them from its own
//! event loop (see [`Carousel::tick`](crate::Carousel::tick)).

/// A one-shot timer holding at most one pending deadline.
///
/// Arming an already armed timer replaces the previous deadline, so a timer
/// can never fire twice for two `arm` calls.
///
/// ## Example
///
/// ```rust
/// use slide_track_core::CancellableTimer;
///
/// let mut timer = CancellableTimer::new();
/// timer.arm(1_000, 200);
///
/// assert!(!timer.poll(1_100));
/// assert!(timer.poll(1_200));
/// // Fired timers are disarmed
/// assert!(!timer.poll(5_000));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CancellableTimer {
    deadline: Option<u64>,
}

impl CancellableTimer {
    /// Create an idle timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer to fire `delay_ms` after `now_ms`, cancelling any
    /// pending deadline first.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.cancel();
        self.deadline = Some(now_ms.saturating_add(delay_ms));
    }

    /// Disarm the timer. Returns `true` if a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Check whether the timer is armed.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Get the pending deadline, if any.
    #[inline]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Fire the timer if its deadline has passed.
    ///
    /// Returns `true` exactly once per arming.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

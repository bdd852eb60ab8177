//! Autoplay controller for timed slide advancement.

use tracing::debug;

use crate::events::CarouselEvent;
use crate::timer::CancellableTimer;

/// Current state of the autoplay timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AutoplayState {
    /// No timer armed
    #[default]
    Idle,
    /// Timer armed, the carousel advances when it fires
    Running,
}

/// Platform-agnostic autoplay controller.
///
/// Like the rest of the core this controller does not own a clock. The
/// caller passes `now_ms` when starting and polls [`tick`](Self::tick) from
/// its own timer; a `true` result means the carousel should step forward.
///
/// `pause` keeps autoplay enabled so a later `start` resumes it. `stop` is a
/// one-shot disable: once called, `start` is a no-op for the rest of the
/// instance's life.
///
/// ## Example
///
/// ```rust
/// use slide_track_core::{AutoplayController, AutoplayState};
///
/// let mut autoplay = AutoplayController::new(true, 3_000);
/// autoplay.start(0);
/// assert_eq!(autoplay.state(), AutoplayState::Running);
///
/// assert!(!autoplay.tick(2_999));
/// assert!(autoplay.tick(3_000));
///
/// // Manual navigation disables autoplay for good
/// autoplay.stop();
/// autoplay.start(4_000);
/// assert_eq!(autoplay.state(), AutoplayState::Idle);
/// assert!(!autoplay.is_enabled());
/// ```
#[derive(Clone, Debug)]
pub struct AutoplayController {
    /// Live autoplay flag, cleared permanently by `stop`
    enabled: bool,
    /// Advance period in milliseconds
    delay_ms: u64,
    /// Current timer state
    state: AutoplayState,
    timer: CancellableTimer,
}

impl AutoplayController {
    /// Create an idle controller.
    pub fn new(enabled: bool, delay_ms: u64) -> Self {
        Self {
            enabled,
            delay_ms: delay_ms.max(1),
            state: AutoplayState::Idle,
            timer: CancellableTimer::new(),
        }
    }

    /// Whether autoplay is still allowed to run.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get the current state.
    #[inline]
    pub fn state(&self) -> AutoplayState {
        self.state
    }

    /// Check if the timer is running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == AutoplayState::Running
    }

    /// Get the advance period in milliseconds.
    #[inline]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Deadline of the pending advance, if running.
    #[inline]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timer.deadline()
    }

    /// Arm the timer, replacing any pending one.
    ///
    /// Does nothing once autoplay has been disabled.
    pub fn start(&mut self, now_ms: u64) -> Option<CarouselEvent> {
        if !self.enabled {
            return None;
        }
        self.timer.arm(now_ms, self.delay_ms);
        self.state = AutoplayState::Running;
        debug!(deadline = now_ms.saturating_add(self.delay_ms), "autoplay started");
        Some(CarouselEvent::AutoplayStarted)
    }

    /// Cancel the timer but keep autoplay enabled.
    pub fn pause(&mut self) -> Option<CarouselEvent> {
        self.timer.cancel();
        self.state = AutoplayState::Idle;
        if !self.enabled {
            return None;
        }
        debug!("autoplay paused");
        Some(CarouselEvent::AutoplayStopped { paused: true })
    }

    /// Cancel the timer and disable autoplay permanently.
    pub fn stop(&mut self) -> Option<CarouselEvent> {
        self.timer.cancel();
        self.state = AutoplayState::Idle;
        if !self.enabled {
            return None;
        }
        self.enabled = false;
        debug!("autoplay stopped permanently");
        Some(CarouselEvent::AutoplayStopped { paused: false })
    }

    /// Cancel the timer without emitting anything or touching the flag.
    ///
    /// Used on teardown.
    pub fn cancel(&mut self) {
        self.timer.cancel();
        self.state = AutoplayState::Idle;
    }

    /// Fire the timer if due and re-arm it for the next period.
    ///
    /// Returns `true` when the carousel should advance.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.state != AutoplayState::Running || !self.timer.poll(now_ms) {
            return false;
        }
        self.timer.arm(now_ms, self.delay_ms);
        true
    }
}

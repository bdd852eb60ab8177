//! Enabled state of the prev/next controls.

use crate::geometry::Viewport;

/// Side effects applied to the host's optional controls.
///
/// Fields for handles the host did not provide stay `None` or empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Controls {
    /// `Some(disabled)` when a previous control exists
    pub prev_disabled: Option<bool>,
    /// `Some(disabled)` when a next control exists
    pub next_disabled: Option<bool>,
    /// One-based index text for the current-index display
    pub current_text: Option<String>,
    /// Active marker per dot indicator
    pub dots: Vec<bool>,
    /// `false` when the slides fit without scrolling
    pub scrollable: bool,
}

/// Which optional controls the host provides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselHandles {
    pub prev: bool,
    pub next: bool,
    pub current: bool,
    pub dots: usize,
}

impl Controls {
    /// Initial control state for the given handles.
    pub fn new(handles: CarouselHandles) -> Self {
        Self {
            prev_disabled: handles.prev.then_some(false),
            next_disabled: handles.next.then_some(false),
            current_text: handles.current.then(String::new),
            dots: vec![false; handles.dots],
            scrollable: true,
        }
    }

    /// Apply the boundary rule for a non-looping carousel.
    pub fn apply_boundary(&mut self, active: Option<i64>, logical_len: usize) {
        let last = logical_len as i64 - 1;
        if let Some(disabled) = self.prev_disabled.as_mut() {
            *disabled = active == Some(0);
        }
        if let Some(disabled) = self.next_disabled.as_mut() {
            *disabled = active == Some(last);
        }
    }

    /// Disable both step controls.
    pub fn disable_steps(&mut self) {
        for disabled in [&mut self.prev_disabled, &mut self.next_disabled]
            .into_iter()
            .flatten()
        {
            *disabled = true;
        }
    }

    /// Update the index display and dot markers for a settled slide.
    pub fn show_active(&mut self, active: i64) {
        if let Some(text) = self.current_text.as_mut() {
            *text = (active + 1).to_string();
        }
        for (j, dot) in self.dots.iter_mut().enumerate() {
            *dot = j as i64 <= active;
        }
    }

    /// Recompute control availability from the current overflow.
    ///
    /// Centered and looping carousels always keep their controls enabled,
    /// so this is a no-op for them.
    pub fn refresh_overflow(
        &mut self,
        viewport: &Viewport,
        active: Option<i64>,
        logical_len: usize,
        centered: bool,
        looping: bool,
    ) {
        if centered || looping {
            return;
        }
        if viewport.overflows() {
            self.scrollable = true;
            self.apply_boundary(active, logical_len);
        } else {
            self.scrollable = false;
            self.disable_steps();
        }
    }
}

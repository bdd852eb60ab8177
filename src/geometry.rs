//! Layout measurements and scroll target calculations.

/// Fixed lead-in added to every scroll target to avoid sub-pixel clipping.
pub const LEAD_IN: f64 = 10.0;

/// Reference point used to align slides within the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Slides align on the viewport's leading edge
    #[default]
    Leading,
    /// Slides align on the viewport's center
    Center,
}

/// How the host should perform a scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animated scroll
    #[default]
    Smooth,
    /// Jump without animation (loop wrap snaps and initial positioning)
    Instant,
}

/// Measured position of one physical slide along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlideBox {
    /// Leading edge, measured from the start of the scroll content
    pub offset: f64,
    /// Size along the scroll axis
    pub extent: f64,
}

impl SlideBox {
    /// Create a new slide box.
    pub fn new(offset: f64, extent: f64) -> Self {
        Self { offset, extent }
    }

    /// Center offset as used for centered scroll targets.
    ///
    /// Both the target slide and the first slide go through the same
    /// formula, so the half-extent term cancels for uniform slides.
    #[inline]
    pub fn center_offset(&self) -> f64 {
        self.offset - self.extent / 2.0
    }

    /// Leading edge relative to the visible area at `scroll_offset`.
    #[inline]
    pub fn visible_position(&self, scroll_offset: f64) -> f64 {
        self.offset - scroll_offset
    }
}

/// Measurements of the scrolling list container.
///
/// Zero-sized values are expected before first paint and are tolerated
/// everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Current scroll position
    pub scroll_offset: f64,
    /// Visible size of the list along the scroll axis
    pub visible_extent: f64,
    /// Total scrollable content size
    pub content_extent: f64,
    /// Decorative content before the first slide (not part of the slides)
    pub leading_decoration: f64,
    /// Decorative content after the last slide
    pub trailing_decoration: f64,
    /// Leading margin of the first slide, used as the leading reference point
    pub first_slide_margin: f64,
}

impl Viewport {
    /// Content size with decorations removed.
    #[inline]
    pub fn slide_content_extent(&self) -> f64 {
        self.content_extent - self.leading_decoration - self.trailing_decoration
    }

    /// Whether the slides overflow the visible area.
    #[inline]
    pub fn overflows(&self) -> bool {
        self.slide_content_extent() > self.visible_extent
    }
}

/// Convert a logical index to a physical index, if it is non-negative.
#[inline]
pub fn physical_index(logical: i64, index_offset: usize) -> Option<usize> {
    let physical = logical.checked_add(index_offset as i64)?;
    usize::try_from(physical).ok()
}

/// Compute the scroll offset that brings `logical` into view.
///
/// Returns `None` when the physical slide has no measurement, which covers
/// both out-of-range requests and empty layouts.
///
/// ## Example
///
/// ```rust
/// use slide_track_core::{target_offset, Alignment, SlideBox};
///
/// let boxes: Vec<_> = (0..4).map(|i| SlideBox::new(i as f64 * 100.0, 100.0)).collect();
///
/// assert_eq!(target_offset(&boxes, 2, 0, Alignment::Leading), Some(210.0));
/// assert_eq!(target_offset(&boxes, 7, 0, Alignment::Leading), None);
/// ```
pub fn target_offset(
    boxes: &[SlideBox],
    logical: i64,
    index_offset: usize,
    alignment: Alignment,
) -> Option<f64> {
    let first = boxes.first()?;
    let slide = boxes.get(physical_index(logical, index_offset)?)?;

    let target = match alignment {
        Alignment::Leading => slide.offset - first.offset,
        Alignment::Center => slide.center_offset() - first.center_offset(),
    };
    Some(target + LEAD_IN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(count: usize, start: f64, extent: f64) -> Vec<SlideBox> {
        (0..count)
            .map(|i| SlideBox::new(start + i as f64 * extent, extent))
            .collect()
    }

    #[test]
    fn leading_target_subtracts_first_offset() {
        let boxes = uniform(5, 16.0, 200.0);
        assert_eq!(target_offset(&boxes, 0, 0, Alignment::Leading), Some(10.0));
        assert_eq!(target_offset(&boxes, 3, 0, Alignment::Leading), Some(610.0));
    }

    #[test]
    fn index_offset_shifts_lookup() {
        let boxes = uniform(9, 0.0, 100.0);
        // Logical 0 with two clones in front is physical 2
        assert_eq!(target_offset(&boxes, 0, 2, Alignment::Leading), Some(210.0));
        // Logical -1 reaches the clone just before the first real slide
        assert_eq!(target_offset(&boxes, -1, 2, Alignment::Leading), Some(110.0));
        assert_eq!(target_offset(&boxes, -3, 2, Alignment::Leading), None);
    }

    #[test]
    fn centered_target_uses_half_extent() {
        let boxes = vec![
            SlideBox::new(0.0, 100.0),
            SlideBox::new(100.0, 300.0),
        ];
        // (100 - 150) - (0 - 50) + 10
        assert_eq!(target_offset(&boxes, 1, 0, Alignment::Center), Some(10.0));
    }

    #[test]
    fn empty_layout_has_no_target() {
        assert_eq!(target_offset(&[], 0, 0, Alignment::Leading), None);
    }

    #[test]
    fn overflow_ignores_decorations() {
        let viewport = Viewport {
            visible_extent: 500.0,
            content_extent: 540.0,
            leading_decoration: 20.0,
            trailing_decoration: 20.0,
            ..Default::default()
        };
        assert_eq!(viewport.slide_content_extent(), 500.0);
        assert!(!viewport.overflows());
    }
}

//! Active slide detection from the current scroll position.

use crate::geometry::{Alignment, SlideBox, Viewport};

/// Slide closest to the alignment reference point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveSlide {
    /// Logical index; outside `0..len` only while a loop wrap is in flight.
    /// `None` when nothing is laid out.
    pub logical_index: Option<i64>,
    /// Distance between the slide and the reference point
    pub distance: f64,
}

impl ActiveSlide {
    /// Result for an empty or unmeasured list.
    pub const NONE: Self = Self {
        logical_index: None,
        distance: f64::INFINITY,
    };

    /// Whether the index lies within `0..len`.
    #[inline]
    pub fn is_within(&self, len: usize) -> bool {
        matches!(self.logical_index, Some(i) if i >= 0 && (i as u64) < len as u64)
    }
}

/// Distance from one slide to the reference point.
fn distance_to_reference(slide: &SlideBox, viewport: &Viewport, alignment: Alignment) -> f64 {
    let position = slide.visible_position(viewport.scroll_offset);
    match alignment {
        Alignment::Center => {
            let slide_center = position + slide.extent / 2.0;
            (slide_center - viewport.visible_extent / 2.0).abs()
        }
        Alignment::Leading => (viewport.first_slide_margin - position).abs(),
    }
}

/// Find the physical slide closest to the reference point.
///
/// Equidistant slides resolve to the lowest physical index. The result is
/// a pure function of the measurements, so repeated calls agree.
///
/// ## Example
///
/// ```rust
/// use slide_track_core::{detect, Alignment, SlideBox, Viewport};
///
/// let boxes: Vec<_> = (0..5).map(|i| SlideBox::new(i as f64 * 100.0, 100.0)).collect();
/// let viewport = Viewport { scroll_offset: 195.0, visible_extent: 300.0, ..Default::default() };
///
/// let active = detect(&boxes, &viewport, Alignment::Leading, 0);
/// assert_eq!(active.logical_index, Some(2));
/// assert_eq!(active.distance, 5.0);
/// ```
pub fn detect(
    boxes: &[SlideBox],
    viewport: &Viewport,
    alignment: Alignment,
    index_offset: usize,
) -> ActiveSlide {
    let mut best: Option<(usize, f64)> = None;

    for (physical, slide) in boxes.iter().enumerate() {
        let distance = distance_to_reference(slide, viewport, alignment);
        if distance.is_nan() {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((physical, distance)),
        }
    }

    match best {
        Some((physical, distance)) => ActiveSlide {
            logical_index: Some(physical as i64 - index_offset as i64),
            distance,
        },
        None => ActiveSlide::NONE,
    }
}

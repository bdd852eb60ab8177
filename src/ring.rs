//! Physical slide list and the loop ring of boundary clones.

use tracing::debug;

use crate::detector::ActiveSlide;
use crate::slide::{Slide, SlideContent};

/// Maximum distance from a clone boundary at which a loop wrap snaps.
pub const WRAP_THRESHOLD: f64 = 10.0;

/// Ordered slides in physical order, with clones at both ends when looping.
///
/// ## Example
///
/// ```rust
/// use slide_track_core::{Element, SlideList};
///
/// let real: Vec<_> = (0..5).map(|i| Element::new("li").with_text(i.to_string())).collect();
/// let list = SlideList::build_ring(real, 2, &|_: u8| None);
///
/// assert_eq!(list.physical_len(), 9);
/// assert_eq!(list.logical_len(), 5);
/// assert_eq!(list.index_offset(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct SlideList<C> {
    slides: Vec<Slide<C>>,
    clone_count: usize,
}

impl<C> SlideList<C> {
    /// Wrap real slides without clones.
    pub fn linear(real: Vec<C>) -> Self {
        Self {
            slides: real.into_iter().map(Slide::real).collect(),
            clone_count: 0,
        }
    }

    /// All slides in physical order.
    #[inline]
    pub fn physical(&self) -> &[Slide<C>] {
        &self.slides
    }

    /// Real slides in logical order.
    pub fn logical(&self) -> impl Iterator<Item = &Slide<C>> {
        self.slides.iter().filter(|s| !s.synthetic)
    }

    /// Number of entries in the physical list.
    #[inline]
    pub fn physical_len(&self) -> usize {
        self.slides.len()
    }

    /// Number of real slides.
    #[inline]
    pub fn logical_len(&self) -> usize {
        self.slides.len() - 2 * self.clone_count
    }

    /// Clones on each side of the real slides.
    #[inline]
    pub fn clone_count(&self) -> usize {
        self.clone_count
    }

    /// Offset added to a logical index to get a physical index.
    #[inline]
    pub fn index_offset(&self) -> usize {
        self.clone_count
    }

    /// Whether there are no slides at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Logical index the view should snap to, if `active` sits on a clone
    /// boundary close enough to wrap.
    pub fn wrap_target(&self, active: &ActiveSlide) -> Option<i64> {
        let len = self.logical_len() as i64;
        let index = active.logical_index?;
        if len == 0 || active.distance >= WRAP_THRESHOLD {
            return None;
        }
        if index < 0 {
            Some(len - 1)
        } else if index >= len {
            Some(0)
        } else {
            None
        }
    }
}

impl<C: SlideContent> SlideList<C> {
    /// Build the loop ring: clones of the last `clone_count` real slides go
    /// in front, clones of the first `clone_count` go behind.
    ///
    /// `clone_count` is clamped to the number of real slides so no slide is
    /// cloned twice on the same side.
    pub fn build_ring(
        real: Vec<C>,
        clone_count: usize,
        class_for_level: &dyn Fn(u8) -> Option<String>,
    ) -> Self {
        let real: Vec<Slide<C>> = real.into_iter().map(Slide::real).collect();
        let count = clone_count.min(real.len());
        if count < clone_count {
            debug!(
                requested = clone_count,
                clamped = count,
                "clone count exceeds slide count"
            );
        }

        let mut slides = Vec::with_capacity(real.len() + 2 * count);
        slides.extend(
            real[real.len() - count..]
                .iter()
                .map(|s| s.synthetic_clone(class_for_level)),
        );
        let trailing: Vec<_> = real[..count]
            .iter()
            .map(|s| s.synthetic_clone(class_for_level))
            .collect();
        slides.extend(real);
        slides.extend(trailing);

        debug!(
            physical = slides.len(),
            clones = count,
            "built loop ring"
        );
        Self {
            slides,
            clone_count: count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::Element;

    fn slides(count: usize) -> Vec<Element> {
        (0..count)
            .map(|i| Element::new("li").with_text(i.to_string()))
            .collect()
    }

    fn labels(list: &SlideList<Element>) -> Vec<String> {
        list.physical()
            .iter()
            .map(|s| s.content.text_content())
            .collect()
    }

    #[test]
    fn ring_order_and_offset() {
        let list = SlideList::build_ring(slides(5), 2, &|_: u8| None);
        assert_eq!(list.physical_len(), 9);
        assert_eq!(list.index_offset(), 2);
        assert_eq!(labels(&list), ["3", "4", "0", "1", "2", "3", "4", "0", "1"]);

        let synthetic: Vec<bool> = list.physical().iter().map(|s| s.synthetic).collect();
        assert_eq!(
            synthetic,
            [true, true, false, false, false, false, false, true, true]
        );
        let logical: Vec<_> = list.logical().map(|s| s.content.text_content()).collect();
        assert_eq!(logical, ["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn clone_count_is_clamped() {
        let list = SlideList::build_ring(slides(3), 10, &|_: u8| None);
        assert_eq!(list.physical_len(), 9);
        assert_eq!(list.clone_count(), 3);
        assert_eq!(list.logical_len(), 3);
        assert_eq!(labels(&list), ["0", "1", "2", "0", "1", "2", "0", "1", "2"]);
    }

    #[test]
    fn zero_clones_and_empty_input() {
        let list = SlideList::build_ring(slides(4), 0, &|_: u8| None);
        assert_eq!(list.physical_len(), 4);
        assert_eq!(list.index_offset(), 0);

        let empty = SlideList::build_ring(Vec::<Element>::new(), 2, &|_: u8| None);
        assert!(empty.is_empty());
        assert_eq!(empty.logical_len(), 0);
    }

    #[test]
    fn clones_are_demoted_but_real_slides_are_not() {
        let real = vec![
            Element::new("li").with_child(Element::new("h3").with_text("A")),
            Element::new("li").with_child(Element::new("h3").with_text("B")),
        ];
        let list = SlideList::build_ring(real, 1, &|level: u8| Some(format!("was-h{level}")));

        for slide in list.physical() {
            let Some(crate::Node::Element(inner)) = slide.content.children.first() else {
                panic!("slide lost its heading");
            };
            if slide.synthetic {
                assert_eq!(inner.tag, "div");
                assert!(inner.has_class("was-h3"));
                assert_eq!(inner.tab_index, Some(-1));
            } else {
                assert_eq!(inner.tag, "h3");
                assert!(inner.classes.is_empty());
                assert_eq!(inner.tab_index, None);
            }
        }
    }

    #[test]
    fn wrap_target_requires_close_distance() {
        let list = SlideList::build_ring(slides(5), 2, &|_: u8| None);
        let at = |index: i64, distance: f64| ActiveSlide {
            logical_index: Some(index),
            distance,
        };

        assert_eq!(list.wrap_target(&at(5, 3.0)), Some(0));
        assert_eq!(list.wrap_target(&at(6, 0.0)), Some(0));
        assert_eq!(list.wrap_target(&at(-1, 9.9)), Some(4));
        assert_eq!(list.wrap_target(&at(-2, 0.0)), Some(4));
        assert_eq!(list.wrap_target(&at(-1, 10.0)), None);
        assert_eq!(list.wrap_target(&at(2, 0.0)), None);
        assert_eq!(list.wrap_target(&ActiveSlide::NONE), None);
    }
}

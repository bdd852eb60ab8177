//! Boundary policy for step navigation.
//!
//! These functions only decide where a step should go. Issuing the scroll
//! and the surrounding notifications is done by [`Carousel`](crate::Carousel).

/// Destination for a step forward, or `None` when the step is a no-op.
///
/// Without looping the last logical slide is a hard stop. With looping the
/// step may land on a trailing clone, which the ring then wraps; the end of
/// the physical list is still respected.
pub fn next_target(active: Option<i64>, logical_len: usize, index_offset: usize, looping: bool) -> Option<i64> {
    let active = active?;
    let physical_len = (logical_len + 2 * index_offset) as i64;
    let bound = if looping {
        physical_len - 1 - index_offset as i64
    } else {
        logical_len as i64 - 1
    };
    (active < bound).then_some(active + 1)
}

/// Destination for a step backward, or `None` when the step is a no-op.
pub fn prev_target(active: Option<i64>, index_offset: usize, looping: bool) -> Option<i64> {
    let active = active?;
    let bound = if looping { -(index_offset as i64) } else { 0 };
    (active > bound).then_some(active - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_stops_at_last_without_loop() {
        assert_eq!(next_target(Some(0), 5, 0, false), Some(1));
        assert_eq!(next_target(Some(3), 5, 0, false), Some(4));
        assert_eq!(next_target(Some(4), 5, 0, false), None);
        assert_eq!(next_target(None, 5, 0, false), None);
    }

    #[test]
    fn next_reaches_trailing_clones_with_loop() {
        // 5 real slides, 2 clones each side: logical range -2..=6
        assert_eq!(next_target(Some(4), 5, 2, true), Some(5));
        assert_eq!(next_target(Some(5), 5, 2, true), Some(6));
        assert_eq!(next_target(Some(6), 5, 2, true), None);
    }

    #[test]
    fn prev_stops_at_first_physical() {
        assert_eq!(prev_target(Some(1), 0, false), Some(0));
        assert_eq!(prev_target(Some(0), 0, false), None);
        assert_eq!(prev_target(Some(0), 2, true), Some(-1));
        assert_eq!(prev_target(Some(-2), 2, true), None);
        assert_eq!(prev_target(None, 2, true), None);
    }
}

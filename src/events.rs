//! Carousel notifications and the subscription registry.

use std::fmt;

/// Notification emitted by a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    /// A programmatic move to a real slide is about to start
    SlideStarted {
        /// Logical index before the move, if one was detected
        previous: Option<i64>,
        /// Logical index being moved to
        next: i64,
    },
    /// The scroll settled on a real slide
    SlideChanged {
        /// Logical index of the active slide
        active: i64,
    },
    /// The autoplay timer was armed
    AutoplayStarted,
    /// The autoplay timer was cancelled; `paused` is `false` for a
    /// permanent stop
    AutoplayStopped { paused: bool },
}

/// Discriminant of [`CarouselEvent`] used for subscriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    SlideStarted,
    SlideChanged,
    AutoplayStarted,
    AutoplayStopped,
}

impl CarouselEvent {
    /// The kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            CarouselEvent::SlideStarted { .. } => EventKind::SlideStarted,
            CarouselEvent::SlideChanged { .. } => EventKind::SlideChanged,
            CarouselEvent::AutoplayStarted => EventKind::AutoplayStarted,
            CarouselEvent::AutoplayStopped { .. } => EventKind::AutoplayStopped,
        }
    }
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

/// Event handler. Handlers run on the caller's thread, so no `Send` bound.
pub type Handler = Box<dyn FnMut(&CarouselEvent)>;

struct Subscription {
    token: SubscriptionToken,
    kind: EventKind,
    handler: Handler,
}

/// Per-instance list of subscribers.
///
/// ## Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use slide_track_core::{CarouselEvent, EventBus, EventKind};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let mut bus = EventBus::new();
///
/// let sink = Rc::clone(&seen);
/// let token = bus.subscribe(EventKind::SlideChanged, move |e| sink.borrow_mut().push(*e));
///
/// bus.emit(CarouselEvent::SlideChanged { active: 2 });
/// bus.emit(CarouselEvent::AutoplayStarted);
/// assert!(bus.unsubscribe(token));
/// bus.emit(CarouselEvent::SlideChanged { active: 3 });
///
/// assert_eq!(*seen.borrow(), vec![CarouselEvent::SlideChanged { active: 2 }]);
/// ```
#[derive(Default)]
pub struct EventBus {
    next_token: u64,
    subscriptions: Vec<Subscription>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for events of `kind`.
    pub fn subscribe(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&CarouselEvent) + 'static,
    ) -> SubscriptionToken {
        let token = SubscriptionToken(self.next_token);
        self.next_token += 1;
        self.subscriptions.push(Subscription {
            token,
            kind,
            handler: Box::new(handler),
        });
        token
    }

    /// Remove a subscription. Returns `false` if the token was unknown.
    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.token != token);
        self.subscriptions.len() != before
    }

    /// Deliver an event to matching subscribers in subscription order.
    pub fn emit(&mut self, event: CarouselEvent) {
        let kind = event.kind();
        for sub in self.subscriptions.iter_mut().filter(|s| s.kind == kind) {
            (sub.handler)(&event);
        }
    }

    /// Drop every subscription.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Whether there are no subscriptions.
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn handlers_only_see_their_kind() {
        let started = Rc::new(Cell::new(0));
        let stopped = Rc::new(Cell::new(0));
        let mut bus = EventBus::new();

        let s = Rc::clone(&started);
        bus.subscribe(EventKind::AutoplayStarted, move |_| s.set(s.get() + 1));
        let s = Rc::clone(&stopped);
        bus.subscribe(EventKind::AutoplayStopped, move |_| s.set(s.get() + 1));

        bus.emit(CarouselEvent::AutoplayStarted);
        bus.emit(CarouselEvent::AutoplayStarted);
        bus.emit(CarouselEvent::AutoplayStopped { paused: true });

        assert_eq!(started.get(), 2);
        assert_eq!(stopped.get(), 1);
    }

    #[test]
    fn tokens_are_unique() {
        let mut bus = EventBus::new();
        let a = bus.subscribe(EventKind::SlideChanged, |_| {});
        let b = bus.subscribe(EventKind::SlideChanged, |_| {});
        assert_ne!(a, b);

        assert!(bus.unsubscribe(a));
        assert!(!bus.unsubscribe(a));
        assert_eq!(bus.len(), 1);

        bus.clear();
        assert!(bus.is_empty());
    }
}

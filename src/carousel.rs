//! Carousel instance: owns the slide list, timers and notifications.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::autoplay::AutoplayController;
use crate::config::CarouselConfig;
use crate::detector::{detect, ActiveSlide};
use crate::error::{CarouselError, Result};
use crate::events::{CarouselEvent, EventBus, EventKind, SubscriptionToken};
use crate::geometry::{target_offset, ScrollBehavior, SlideBox, Viewport};
use crate::navigation::{next_target, prev_target};
use crate::ring::SlideList;
use crate::slide::{Slide, SlideContent};
use crate::timer::CancellableTimer;
use crate::visibility::{CarouselHandles, Controls};

/// Quiet window after the last scroll notification before a scroll counts
/// as settled.
pub const SETTLE_DEBOUNCE_MS: u64 = 200;

/// Delay before the initial instant snap of a looping carousel.
pub const INITIAL_SNAP_DELAY_MS: u64 = 100;

/// The scrolling list container that hosts the slides.
///
/// Implementations measure the live layout on demand and perform scrolls.
/// Scroll animations are asynchronous: the host reports progress by calling
/// [`Carousel::on_scroll`] whenever the position changes.
///
/// Requested offsets include the [`LEAD_IN`](crate::LEAD_IN) nudge, so the
/// host must settle onto slide edges (CSS scroll-snap in a browser). A host
/// that stops exactly on the requested offset leaves a clone at distance
/// [`WRAP_THRESHOLD`](crate::WRAP_THRESHOLD) and the loop never wraps.
pub trait ScrollHost {
    /// Content type of the slides in this host.
    type Content: SlideContent;

    /// Measurements for each physical slide, in physical order.
    fn slide_boxes(&self) -> Vec<SlideBox>;

    /// Measurements of the list container.
    fn viewport(&self) -> Viewport;

    /// Scroll the list to `offset`.
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);

    /// Render the physical slide list after the loop ring was built.
    fn sync_slides(&mut self, slides: &[Slide<Self::Content>]) {
        let _ = slides;
    }
}

/// Lifecycle hooks driven by the element that embeds the carousel.
pub trait Lifecycle {
    /// Set up the slide list and start timers.
    fn on_attach(&mut self, now_ms: u64) -> Result<()>;

    /// Release timers and subscribers.
    fn on_detach(&mut self);
}

enum Phase<C> {
    /// Created, slides not yet wired
    Unattached(Option<Vec<C>>),
    /// Slide list built and navigation live
    Attached(SlideList<C>),
    /// Attach failed, every operation is a no-op
    Inert,
    /// Torn down
    Detached,
}

/// A carousel widget instance.
///
/// Every time-dependent operation takes the current time in milliseconds
/// and the host calls [`tick`](Self::tick) to run due timers: the settle
/// debounce, the autoplay advance and the initial loop snap.
///
/// ## Example
///
/// ```rust
/// use slide_track_core::{
///     Carousel, CarouselConfig, CarouselHandles, Element, Lifecycle, ScrollBehavior,
///     ScrollHost, Slide, SlideBox, Viewport,
/// };
///
/// struct Strip { scroll: f64, count: usize }
///
/// impl ScrollHost for Strip {
///     type Content = Element;
///     fn slide_boxes(&self) -> Vec<SlideBox> {
///         (0..self.count).map(|i| SlideBox::new(i as f64 * 100.0, 100.0)).collect()
///     }
///     fn viewport(&self) -> Viewport {
///         Viewport {
///             scroll_offset: self.scroll,
///             visible_extent: 250.0,
///             content_extent: self.count as f64 * 100.0,
///             ..Default::default()
///         }
///     }
///     fn scroll_to(&mut self, offset: f64, _behavior: ScrollBehavior) {
///         self.scroll = offset;
///     }
///     fn sync_slides(&mut self, slides: &[Slide<Element>]) {
///         self.count = slides.len();
///     }
/// }
///
/// let slides = (0..4).map(|_| Element::new("li")).collect();
/// let mut carousel = Carousel::new(
///     CarouselConfig::default(),
///     Strip { scroll: 0.0, count: 0 },
///     Some(slides),
///     CarouselHandles::default(),
/// )?;
/// carousel.on_attach(0)?;
///
/// carousel.next(ScrollBehavior::Smooth);
/// carousel.on_scroll(10);
/// carousel.tick(210);
/// assert_eq!(carousel.active_slide().logical_index, Some(1));
/// # Ok::<(), slide_track_core::CarouselError>(())
/// ```
pub struct Carousel<H: ScrollHost> {
    config: CarouselConfig,
    host: H,
    phase: Phase<H::Content>,
    controls: Controls,
    events: EventBus,
    autoplay: AutoplayController,
    settle: CancellableTimer,
    initial_snap: CancellableTimer,
    /// In-range index seen by the most recent scroll notification
    settle_index: Option<i64>,
    /// Controller-driven scrolls since the last settle
    programmatic: u32,
}

impl<H: ScrollHost + fmt::Debug> fmt::Debug for Carousel<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match &self.phase {
            Phase::Unattached(_) => "unattached",
            Phase::Attached(_) => "attached",
            Phase::Inert => "inert",
            Phase::Detached => "detached",
        };
        f.debug_struct("Carousel")
            .field("config", &self.config)
            .field("host", &self.host)
            .field("phase", &phase)
            .field("controls", &self.controls)
            .field("autoplay", &self.autoplay)
            .field("programmatic", &self.programmatic)
            .finish_non_exhaustive()
    }
}

impl<H: ScrollHost> Carousel<H> {
    /// Create an unattached carousel.
    ///
    /// `slides` is the real slide content found by the host, or `None` when
    /// no slide list exists. A missing list is reported by
    /// [`Lifecycle::on_attach`], not here.
    pub fn new(
        config: CarouselConfig,
        host: H,
        slides: Option<Vec<H::Content>>,
        handles: CarouselHandles,
    ) -> Result<Self> {
        config.validate()?;
        let autoplay = AutoplayController::new(config.autoplay, config.autoplay_delay_ms);
        Ok(Self {
            config,
            host,
            phase: Phase::Unattached(slides),
            controls: Controls::new(handles),
            events: EventBus::new(),
            autoplay,
            settle: CancellableTimer::new(),
            initial_snap: CancellableTimer::new(),
            settle_index: None,
            programmatic: 0,
        })
    }

    /// Register a handler for one kind of notification.
    pub fn subscribe(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&CarouselEvent) + 'static,
    ) -> SubscriptionToken {
        self.events.subscribe(kind, handler)
    }

    /// Remove a subscription.
    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        self.events.unsubscribe(token)
    }

    #[inline]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current state of the optional controls.
    #[inline]
    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    #[inline]
    pub fn autoplay(&self) -> &AutoplayController {
        &self.autoplay
    }

    /// The slide list, once attached.
    pub fn slides(&self) -> Option<&SlideList<H::Content>> {
        match &self.phase {
            Phase::Attached(list) => Some(list),
            _ => None,
        }
    }

    /// Whether navigation is wired up.
    #[inline]
    pub fn is_attached(&self) -> bool {
        matches!(self.phase, Phase::Attached(_))
    }

    fn emit(&mut self, event: Option<CarouselEvent>) {
        if let Some(event) = event {
            self.events.emit(event);
        }
    }

    fn attach(&mut self, real: Vec<H::Content>, now_ms: u64) {
        let list = if self.config.looping {
            let class_for_level = |level: u8| self.config.demotion_class(level).map(str::to_string);
            SlideList::build_ring(real, self.config.clone_count, &class_for_level)
        } else {
            SlideList::linear(real)
        };
        self.host.sync_slides(list.physical());

        debug!(
            slides = list.logical_len(),
            physical = list.physical_len(),
            looping = self.config.looping,
            centered = self.config.centered,
            "carousel attached"
        );
        let looping = self.config.looping;
        self.phase = Phase::Attached(list);

        if looping {
            self.initial_snap.arm(now_ms, INITIAL_SNAP_DELAY_MS);
        }
        self.refresh();
        let event = self.autoplay.start(now_ms);
        self.emit(event);
    }

    /// Detect the slide closest to the reference point.
    pub fn active_slide(&self) -> ActiveSlide {
        let Some(list) = self.slides() else {
            return ActiveSlide::NONE;
        };
        detect(
            &self.host.slide_boxes(),
            &self.host.viewport(),
            self.config.alignment(),
            list.index_offset(),
        )
    }

    /// Issue a controller-driven scroll. Returns `false` when the target
    /// slide does not exist.
    fn scroll_to_logical(&mut self, logical: i64, behavior: ScrollBehavior) -> bool {
        let Some(list) = self.slides() else {
            return false;
        };
        let boxes = self.host.slide_boxes();
        let Some(offset) =
            target_offset(&boxes, logical, list.index_offset(), self.config.alignment())
        else {
            trace!(logical, "no slide at navigation target");
            return false;
        };
        // A scroll to the current position produces no notification
        if (offset - self.host.viewport().scroll_offset).abs() >= 0.5 {
            self.programmatic += 1;
        }
        self.host.scroll_to(offset, behavior);
        true
    }

    /// Scroll to a logical slide.
    ///
    /// Out-of-range requests are no-ops. Emits
    /// [`CarouselEvent::SlideStarted`] before moving to a real slide.
    pub fn goto(&mut self, logical: i64, behavior: ScrollBehavior) {
        let Some(list) = self.slides() else {
            return;
        };
        let len = list.logical_len() as i64;
        let index_offset = list.index_offset();
        let boxes = self.host.slide_boxes();
        if target_offset(&boxes, logical, index_offset, self.config.alignment()).is_none() {
            trace!(logical, "goto out of range");
            return;
        }

        if (0..len).contains(&logical) {
            let previous = self.active_slide().logical_index;
            self.events.emit(CarouselEvent::SlideStarted {
                previous,
                next: logical,
            });
        }
        self.scroll_to_logical(logical, behavior);
    }

    /// Step to the following slide.
    pub fn next(&mut self, behavior: ScrollBehavior) {
        let Some(list) = self.slides() else {
            return;
        };
        let (len, offset) = (list.logical_len(), list.index_offset());
        let active = self.active_slide().logical_index;
        if let Some(target) = next_target(active, len, offset, self.config.looping) {
            self.goto(target, behavior);
        }
    }

    /// Step to the preceding slide.
    pub fn prev(&mut self, behavior: ScrollBehavior) {
        let Some(list) = self.slides() else {
            return;
        };
        let offset = list.index_offset();
        let active = self.active_slide().logical_index;
        if let Some(target) = prev_target(active, offset, self.config.looping) {
            self.goto(target, behavior);
        }
    }

    /// The user pressed the next control: autoplay stops for good.
    pub fn next_clicked(&mut self) {
        if !self.is_attached() {
            return;
        }
        self.stop_autoplay();
        self.next(ScrollBehavior::Smooth);
    }

    /// The user pressed the previous control: autoplay stops for good.
    pub fn prev_clicked(&mut self) {
        if !self.is_attached() {
            return;
        }
        self.stop_autoplay();
        self.prev(ScrollBehavior::Smooth);
    }

    /// Handle a scroll position change.
    ///
    /// Wraps the loop ring when a clone boundary is reached, otherwise
    /// restarts the settle debounce.
    pub fn on_scroll(&mut self, now_ms: u64) {
        let Some(list) = self.slides() else {
            return;
        };
        let active = self.active_slide();
        let len = list.logical_len();

        if self.config.looping {
            if let Some(target) = list.wrap_target(&active) {
                debug!(from = ?active.logical_index, to = target, "loop wrap");
                self.scroll_to_logical(target, ScrollBehavior::Instant);
                return;
            }
        }
        if !active.is_within(len) {
            // Still travelling through the clones
            return;
        }

        self.settle_index = active.logical_index;
        self.settle.arm(now_ms, SETTLE_DEBOUNCE_MS);
    }

    /// Recompute control availability, e.g. after a viewport resize.
    pub fn refresh(&mut self) {
        let Some(list) = self.slides() else {
            return;
        };
        let len = list.logical_len();
        let active = self.active_slide().logical_index;
        let viewport = self.host.viewport();
        self.controls.refresh_overflow(
            &viewport,
            active,
            len,
            self.config.centered,
            self.config.looping,
        );
    }

    /// Viewport resize notification.
    pub fn on_resize(&mut self) {
        self.refresh();
    }

    fn settle(&mut self) {
        let programmatic = std::mem::take(&mut self.programmatic) > 0;
        let Some(active) = self.settle_index.take() else {
            return;
        };
        let Some(len) = self.slides().map(SlideList::logical_len) else {
            return;
        };

        self.controls.show_active(active);
        if !self.config.looping && self.controls.scrollable {
            self.controls.apply_boundary(Some(active), len);
        }
        trace!(active, programmatic, "scroll settled");
        self.events.emit(CarouselEvent::SlideChanged { active });

        if !programmatic {
            self.stop_autoplay();
        }
    }

    /// Run every timer that is due at `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        if !self.is_attached() {
            return;
        }
        if self.initial_snap.poll(now_ms) {
            self.scroll_to_logical(0, ScrollBehavior::Instant);
        }
        if self.settle.poll(now_ms) {
            self.settle();
        }
        if self.autoplay.tick(now_ms) {
            self.next(ScrollBehavior::Smooth);
        }
    }

    /// Start or restart autoplay.
    pub fn start_autoplay(&mut self, now_ms: u64) {
        if !self.is_attached() {
            return;
        }
        let event = self.autoplay.start(now_ms);
        self.emit(event);
    }

    /// Pause autoplay until the next start.
    pub fn pause_autoplay(&mut self) {
        if !self.is_attached() {
            return;
        }
        let event = self.autoplay.pause();
        self.emit(event);
    }

    /// Disable autoplay for the rest of this instance's life.
    pub fn stop_autoplay(&mut self) {
        if !self.is_attached() {
            return;
        }
        let event = self.autoplay.stop();
        self.emit(event);
    }

    /// Pointer entered the carousel.
    pub fn pointer_enter(&mut self) {
        self.pause_autoplay();
    }

    /// Pointer left the carousel.
    pub fn pointer_leave(&mut self, now_ms: u64) {
        self.start_autoplay(now_ms);
    }

    /// Cancel every timer and drop subscribers. Later calls are no-ops.
    pub fn teardown(&mut self) {
        self.autoplay.cancel();
        self.settle.cancel();
        self.initial_snap.cancel();
        self.settle_index = None;
        self.programmatic = 0;
        self.events.clear();
        if !matches!(self.phase, Phase::Detached) {
            debug!("carousel torn down");
        }
        self.phase = Phase::Detached;
    }
}

impl<H: ScrollHost> Lifecycle for Carousel<H> {
    fn on_attach(&mut self, now_ms: u64) -> Result<()> {
        match std::mem::replace(&mut self.phase, Phase::Inert) {
            Phase::Unattached(Some(real)) if !real.is_empty() => {
                self.attach(real, now_ms);
                Ok(())
            }
            Phase::Unattached(_) => {
                warn!("carousel has no slide list, navigation disabled");
                Err(CarouselError::MissingSlideList)
            }
            other => {
                // Already set up, inert or torn down
                self.phase = other;
                Ok(())
            }
        }
    }

    fn on_detach(&mut self) {
        self.teardown();
    }
}

//! # slide-track-core
//!
//! Core slide-position state machine and scroll synchronization for
//! carousel widgets.
//!
//! This crate provides platform-agnostic logic for:
//! - Resolving the scroll offset that brings a slide into view
//! - Detecting the active slide from the current scroll position
//! - Building an infinite-loop ring of cloned boundary slides
//! - Step navigation with clamp or wrap boundaries
//! - Autoplay with pause-on-hover and one-shot permanent stop
//! - Enabling or disabling prev/next controls based on overflow
//!
//! The core never reads a clock or registers listeners. The embedding
//! component forwards scroll, resize and pointer notifications together with
//! the current time, and calls [`Carousel::tick`] to run due timers.
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for configuration and slide trees
//! - `toml` - Load [`CarouselConfig`] from TOML
//! - `web` - Enable the DOM-backed [`ScrollHost`] adapter
//!
//! ## Example
//!
//! ```rust,ignore
//! use slide_track_core::{Carousel, CarouselConfig, CarouselHandles, Lifecycle, ScrollBehavior};
//!
//! let config = CarouselConfig { looping: true, autoplay: true, ..Default::default() };
//! let mut carousel = Carousel::new(config, host, Some(slides), CarouselHandles::default())?;
//! carousel.on_attach(now_ms())?;
//!
//! // From the host's event handlers
//! carousel.on_scroll(now_ms());
//! carousel.next_clicked();
//! carousel.tick(now_ms());
//! ```

mod autoplay;
mod carousel;
mod config;
mod detector;
mod error;
mod events;
mod geometry;
mod navigation;
mod ring;
mod slide;
mod timer;
mod visibility;

#[cfg(feature = "web")]
pub mod web;

pub use autoplay::{AutoplayController, AutoplayState};
pub use carousel::{Carousel, Lifecycle, ScrollHost, INITIAL_SNAP_DELAY_MS, SETTLE_DEBOUNCE_MS};
pub use config::{CarouselConfig, DEFAULT_AUTOPLAY_DELAY_MS, DEFAULT_CLONE_COUNT};
pub use detector::{detect, ActiveSlide};
pub use error::{CarouselError, Result};
pub use events::{CarouselEvent, EventBus, EventKind, Handler, SubscriptionToken};
pub use geometry::{physical_index, target_offset, Alignment, ScrollBehavior, SlideBox, Viewport, LEAD_IN};
pub use navigation::{next_target, prev_target};
pub use ring::{SlideList, WRAP_THRESHOLD};
pub use slide::{Element, Node, Slide, SlideContent};
pub use timer::CancellableTimer;
pub use visibility::{CarouselHandles, Controls};

#[cfg(feature = "web")]
pub use web::{DomScrollHost, DomSlide};

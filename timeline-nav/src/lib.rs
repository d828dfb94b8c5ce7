//! A headless navigation engine for horizontally scrolling timelines and card carousels.
//!
//! For raw input dispatch, eased snapping and render attributes, see the
//! `timeline-nav-adapter` crate.
//!
//! This crate owns the navigation state machine: it turns discrete commands (next, previous,
//! jump-to-index), single-pointer drag gestures and an optional autoplay clock into one
//! authoritative scroll offset that always stays inside the content bounds.
//!
//! It is UI-agnostic. A TUI/GUI/web layer is expected to provide:
//! - the event list and card geometry (via [`TimelineOptions`])
//! - the visible container width
//! - pointer coordinates during drags
//! - clock samples in milliseconds (for autoplay)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod drag;
mod event;
mod expansion;
mod geometry;
mod options;
mod state;
mod timeline;


pub use autoplay::AutoplayTimer;
pub use drag::{DragPhase, DragTracker};
pub use event::Event;
pub use expansion::ExpandedSet;
pub use geometry::Geometry;
pub use options::{
    DEFAULT_ACCENT_COLOR, DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_BACKGROUND_COLOR,
    DEFAULT_CARD_HEIGHT, DEFAULT_CARD_WIDTH, DEFAULT_SPACING, DEFAULT_VIEWPORT_WIDTH,
    OnChangeCallback, TimelineOptions,
};
pub use state::Frame;
pub use timeline::Timeline;

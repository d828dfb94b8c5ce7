//! Adapter utilities for the `timeline-nav` crate.
//!
//! The `timeline-nav` crate is UI-agnostic and focuses on navigation state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Raw pointer/touch/click/resize dispatch with strict ordering ([`Controller`])
//! - Tween-based snap animation after a drag or command (adapter-driven)
//! - Render attributes as a pure function of state and options ([`visuals`])
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod input;
mod tween;
mod visuals;

#[cfg(test)]
mod tests;

pub use controller::{Controller, DEFAULT_SNAP_DURATION_MS};
pub use input::{InputEvent, TouchPoint};
pub use tween::{Easing, Tween};
pub use visuals::{
    ArrowVisuals, BulletVisuals, CARD_BACKGROUND, CardVisuals, Cursor, ExpandAffordance,
    INACTIVE_BULLET_COLOR, TAG_HOVER_ALPHA, TRANSPARENT, TagVisuals, TimelineVisuals,
    TrackVisuals, Transition, tag_visuals, visuals,
};

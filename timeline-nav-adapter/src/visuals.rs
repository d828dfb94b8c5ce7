//! Render attributes computed from timeline state and options.
//!
//! Everything here is a pure function of `(Timeline, TimelineOptions)`, evaluated each
//! render. Renderers never mutate styling in place (e.g. on hover); they ask for the
//! attributes of the new state instead.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use timeline_nav::{Timeline, TimelineOptions};

use crate::DEFAULT_SNAP_DURATION_MS;

pub const CARD_BACKGROUND: &str = "#ffffff";
pub const INACTIVE_BULLET_COLOR: &str = "rgba(0, 0, 0, 0.3)";
pub const TRANSPARENT: &str = "transparent";
/// Hex alpha appended to the accent colour for hovered tags (~12% opacity).
pub const TAG_HOVER_ALPHA: &str = "20";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cursor {
    Default,
    Grab,
    Grabbing,
}

/// Easing applied by the renderer when the track offset changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// Follow the offset immediately (during a drag).
    None,
    EaseOut { duration_ms: u64 },
}

/// The strip of cards that slides under the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackVisuals {
    /// Leftward translation in pixels.
    pub offset: f32,
    pub width: u64,
    pub gap: u32,
    pub transition: Transition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrowVisuals {
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BulletVisuals {
    pub index: usize,
    pub active: bool,
    pub color: String,
}

/// The expand/collapse button on a card with a long description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpandAffordance {
    ReadMore,
    ShowLess,
}

impl ExpandAffordance {
    pub fn label(self) -> &'static str {
        match self {
            Self::ReadMore => "Read More",
            Self::ShowLess => "Show Less",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::ReadMore => '▼',
            Self::ShowLess => '▲',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardVisuals {
    pub index: usize,
    pub width: u32,
    pub min_height: u32,
    pub background: String,
    pub date_label: String,
    pub image_alt: Option<String>,
    pub expand: Option<ExpandAffordance>,
    pub show_description: bool,
    pub has_custom_component: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelineVisuals {
    pub background: String,
    pub accent: String,
    pub cursor: Cursor,
    pub track: TrackVisuals,
    /// `None` when arrows are hidden or there are no events.
    pub arrows: Option<ArrowVisuals>,
    /// Empty when bullets are hidden.
    pub bullets: Vec<BulletVisuals>,
    pub cards: Vec<CardVisuals>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagVisuals {
    pub border_color: String,
    pub color: String,
    pub background: String,
}

pub fn visuals<C>(t: &Timeline<C>) -> TimelineVisuals {
    let options = t.options();
    let accent = &options.accent_color;
    let count = t.count();

    let cursor = match (options.drag_enabled, t.is_dragging()) {
        (false, _) => Cursor::Default,
        (true, false) => Cursor::Grab,
        (true, true) => Cursor::Grabbing,
    };

    let transition = if t.is_dragging() {
        Transition::None
    } else {
        Transition::EaseOut {
            duration_ms: DEFAULT_SNAP_DURATION_MS,
        }
    };

    let arrows = (options.show_arrows && count > 0).then(|| ArrowVisuals {
        previous_disabled: !t.can_go_previous(),
        next_disabled: !t.can_go_next(),
    });

    let bullets = if options.show_bullets {
        (0..count)
            .map(|index| {
                let active = index == t.current_index();
                BulletVisuals {
                    index,
                    active,
                    color: if active {
                        accent.clone()
                    } else {
                        String::from(INACTIVE_BULLET_COLOR)
                    },
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    let cards = t
        .events()
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let expanded = t.is_expanded(index);
            CardVisuals {
                index,
                width: options.card_width,
                min_height: options.card_height,
                background: event
                    .background_color
                    .clone()
                    .unwrap_or_else(|| String::from(CARD_BACKGROUND)),
                date_label: event.date_label(),
                image_alt: event
                    .image
                    .as_ref()
                    .and(event.image_alt_text())
                    .map(String::from),
                expand: event.is_expandable().then_some(if expanded {
                    ExpandAffordance::ShowLess
                } else {
                    ExpandAffordance::ReadMore
                }),
                show_description: expanded && event.is_expandable(),
                has_custom_component: t.custom_component(index).is_some(),
            }
        })
        .collect();

    TimelineVisuals {
        background: options.background_color.clone(),
        accent: accent.clone(),
        cursor,
        track: TrackVisuals {
            offset: t.live_offset(),
            width: t.total_width(),
            gap: options.spacing,
            transition,
        },
        arrows,
        bullets,
        cards,
    }
}

/// Colours for a tag chip; hovering tints the background with the accent colour.
pub fn tag_visuals<C>(options: &TimelineOptions<C>, hovered: bool) -> TagVisuals {
    let accent = &options.accent_color;
    TagVisuals {
        border_color: accent.clone(),
        color: accent.clone(),
        background: if hovered {
            format!("{accent}{TAG_HOVER_ALPHA}")
        } else {
            String::from(TRANSPARENT)
        },
    }
}

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::Event;
use crate::timeline::Timeline;

pub const DEFAULT_CARD_WIDTH: u32 = 320;
pub const DEFAULT_CARD_HEIGHT: u32 = 400;
pub const DEFAULT_SPACING: u32 = 20;
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 3000;
/// Viewport width assumed until the host reports the real container width.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 800;
pub const DEFAULT_BACKGROUND_COLOR: &str = "#f5f5f5";
pub const DEFAULT_ACCENT_COLOR: &str = "#1976d2";

/// A callback fired after a timeline state update.
pub type OnChangeCallback<C> = Arc<dyn Fn(&Timeline<C>) + Send + Sync>;

/// Configuration for [`crate::Timeline`].
///
/// Cheap to clone: the event list, custom inserts and callbacks live in `Arc`s, so hosts can
/// tweak a few fields and call `Timeline::set_options` every render without copying content.
///
/// `C` is the host's opaque "custom insert" type (a widget, a closure, a markup fragment...).
/// The engine never inspects it.
pub struct TimelineOptions<C = ()> {
    pub events: Arc<[Event]>,
    pub card_width: u32,
    pub card_height: u32,
    pub spacing: u32,

    pub show_bullets: bool,
    pub show_arrows: bool,
    /// Enables pointer/touch drag navigation.
    pub drag_enabled: bool,

    /// Enables timer-driven cyclic advance (only when there is more than one event).
    pub autoplay: bool,
    pub autoplay_interval_ms: u64,
    /// Holds autoplay while a drag is in progress and restarts the period on release.
    ///
    /// Off by default: autoplay keeps cycling underneath a drag.
    pub pause_autoplay_while_dragging: bool,

    pub background_color: String,
    pub accent_color: String,

    /// Extra content rendered inside the card at a given index.
    ///
    /// Entries keyed outside `[0, count)` are ignored.
    pub custom_components: Arc<BTreeMap<usize, C>>,

    /// Container width used until `Timeline::set_viewport_width` reports the real one.
    pub initial_viewport_width: Option<u32>,

    pub on_change: Option<OnChangeCallback<C>>,
}

impl<C> Clone for TimelineOptions<C> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
            card_width: self.card_width,
            card_height: self.card_height,
            spacing: self.spacing,
            show_bullets: self.show_bullets,
            show_arrows: self.show_arrows,
            drag_enabled: self.drag_enabled,
            autoplay: self.autoplay,
            autoplay_interval_ms: self.autoplay_interval_ms,
            pause_autoplay_while_dragging: self.pause_autoplay_while_dragging,
            background_color: self.background_color.clone(),
            accent_color: self.accent_color.clone(),
            custom_components: Arc::clone(&self.custom_components),
            initial_viewport_width: self.initial_viewport_width,
            on_change: self.on_change.clone(),
        }
    }
}

impl<C> Default for TimelineOptions<C> {
    fn default() -> Self {
        Self {
            events: Arc::from(Vec::new()),
            card_width: DEFAULT_CARD_WIDTH,
            card_height: DEFAULT_CARD_HEIGHT,
            spacing: DEFAULT_SPACING,
            show_bullets: true,
            show_arrows: true,
            drag_enabled: true,
            autoplay: false,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            pause_autoplay_while_dragging: false,
            background_color: String::from(DEFAULT_BACKGROUND_COLOR),
            accent_color: String::from(DEFAULT_ACCENT_COLOR),
            custom_components: Arc::new(BTreeMap::new()),
            initial_viewport_width: None,
            on_change: None,
        }
    }
}

impl<C> TimelineOptions<C> {
    /// Creates options for `events` with every other setting at its default.
    pub fn new(events: impl Into<Arc<[Event]>>) -> Self {
        Self {
            events: events.into(),
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.events.len()
    }

    /// Viewport width to start from: the configured initial width or the 800px fallback.
    pub fn resolved_viewport_width(&self) -> u32 {
        self.initial_viewport_width.unwrap_or(DEFAULT_VIEWPORT_WIDTH)
    }

    /// Custom insert for `index`, ignoring entries keyed past the last event.
    pub fn custom_component(&self, index: usize) -> Option<&C> {
        if index >= self.count() {
            return None;
        }
        self.custom_components.get(&index)
    }

    pub fn with_events(mut self, events: impl Into<Arc<[Event]>>) -> Self {
        self.events = events.into();
        self
    }

    pub fn with_card_size(mut self, card_width: u32, card_height: u32) -> Self {
        self.card_width = card_width;
        self.card_height = card_height;
        self
    }

    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_show_bullets(mut self, show_bullets: bool) -> Self {
        self.show_bullets = show_bullets;
        self
    }

    pub fn with_show_arrows(mut self, show_arrows: bool) -> Self {
        self.show_arrows = show_arrows;
        self
    }

    pub fn with_drag_enabled(mut self, drag_enabled: bool) -> Self {
        self.drag_enabled = drag_enabled;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool, interval_ms: u64) -> Self {
        self.autoplay = autoplay;
        self.autoplay_interval_ms = interval_ms;
        self
    }

    pub fn with_pause_autoplay_while_dragging(mut self, pause: bool) -> Self {
        self.pause_autoplay_while_dragging = pause;
        self
    }

    pub fn with_colors(
        mut self,
        background_color: impl Into<String>,
        accent_color: impl Into<String>,
    ) -> Self {
        self.background_color = background_color.into();
        self.accent_color = accent_color.into();
        self
    }

    pub fn with_custom_components(
        mut self,
        components: impl IntoIterator<Item = (usize, C)>,
    ) -> Self {
        self.custom_components = Arc::new(components.into_iter().collect());
        self
    }

    pub fn with_initial_viewport_width(mut self, width: Option<u32>) -> Self {
        self.initial_viewport_width = width;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Timeline<C>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<C> core::fmt::Debug for TimelineOptions<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TimelineOptions")
            .field("count", &self.events.len())
            .field("card_width", &self.card_width)
            .field("card_height", &self.card_height)
            .field("spacing", &self.spacing)
            .field("show_bullets", &self.show_bullets)
            .field("show_arrows", &self.show_arrows)
            .field("drag_enabled", &self.drag_enabled)
            .field("autoplay", &self.autoplay)
            .field("autoplay_interval_ms", &self.autoplay_interval_ms)
            .field(
                "pause_autoplay_while_dragging",
                &self.pause_autoplay_while_dragging,
            )
            .field("background_color", &self.background_color)
            .field("accent_color", &self.accent_color)
            .field("custom_components", &self.custom_components.len())
            .field("initial_viewport_width", &self.initial_viewport_width)
            .finish_non_exhaustive()
    }
}

use timeline_nav::{Timeline, TimelineOptions};

use crate::input::first_touch_x;
use crate::{Easing, InputEvent, TimelineVisuals, Tween, visuals};

/// Duration of the eased snap after a commit.
pub const DEFAULT_SNAP_DURATION_MS: u64 = 300;

/// A framework-neutral controller that wraps a `timeline_nav::Timeline` and provides the
/// common adapter workflows: raw input dispatch, autoplay ticking and eased snapping.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `handle`/`dispatch` when UI events occur
/// - `tick(now_ms)` each frame/timer tick (for autoplay and the snap tween)
///
/// The offset returned by `tick()` is what a frame-driven renderer should draw. While a drag
/// is in progress it is the live, unsmoothed offset; after a commit it eases toward the
/// committed offset.
#[derive(Clone, Debug)]
pub struct Controller<C = ()> {
    t: Timeline<C>,
    tween: Option<Tween>,
    rendered: f32,
    snap_duration_ms: u64,
    easing: Easing,
}

impl<C> Controller<C> {
    /// Mounts a new timeline at `now_ms`.
    pub fn new(options: TimelineOptions<C>, now_ms: u64) -> Self {
        Self::from_timeline(Timeline::new(options), now_ms)
    }

    pub fn from_timeline(mut t: Timeline<C>, now_ms: u64) -> Self {
        t.sync_clock(now_ms);
        tdebug!(count = t.count(), now_ms, "Controller mounted");
        let rendered = t.live_offset();
        Self {
            t,
            tween: None,
            rendered,
            snap_duration_ms: DEFAULT_SNAP_DURATION_MS,
            easing: Easing::EaseOut,
        }
    }

    pub fn with_snap_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.snap_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn timeline(&self) -> &Timeline<C> {
        &self.t
    }

    /// Direct access to the timeline. Committed changes made here are eased on the next
    /// `tick`.
    pub fn timeline_mut(&mut self) -> &mut Timeline<C> {
        &mut self.t
    }

    /// Tears the timeline down and hands it back. No autoplay advance fires afterwards.
    pub fn unmount(mut self) -> Timeline<C> {
        tdebug!(index = self.t.current_index(), "Controller unmounted");
        self.t.teardown();
        self.t
    }

    pub fn rendered_offset(&self) -> f32 {
        self.rendered
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Stops the snap tween and jumps to the committed offset.
    pub fn cancel_animation(&mut self) {
        if let Some(tween) = self.tween.take() {
            self.rendered = tween.to;
        }
    }

    /// Replaces the options at `now_ms`. A rescheduled autoplay period starts at `now_ms`.
    pub fn set_options(&mut self, options: TimelineOptions<C>, now_ms: u64) {
        self.t.set_options(options);
        self.t.sync_clock(now_ms);
        self.follow(now_ms);
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut TimelineOptions<C>), now_ms: u64) {
        self.t.update_options(f);
        self.t.sync_clock(now_ms);
        self.follow(now_ms);
    }

    /// Applies one input event. Returns `true` if it changed anything a renderer shows.
    ///
    /// A release is committed before this returns, so a click handled next already sees the
    /// post-drag index.
    pub fn handle(&mut self, event: InputEvent, now_ms: u64) -> bool {
        ttrace!(?event, now_ms, "handle");
        self.t.sync_clock(now_ms);
        let before = self.t.frame();
        let mut changed = false;

        match event {
            InputEvent::PointerDown { x } => {
                self.t.on_drag_start(x);
            }
            InputEvent::PointerMove { x } => {
                self.t.on_drag_move(x);
            }
            InputEvent::PointerUp | InputEvent::TouchEnd => {
                self.t.on_drag_end();
            }
            InputEvent::PointerLeave | InputEvent::TouchCancel => {
                self.t.on_pointer_leave();
            }
            InputEvent::TouchStart { touches } => {
                if let Some(x) = first_touch_x(&touches) {
                    self.t.on_drag_start(x);
                }
            }
            InputEvent::TouchMove { touches } => {
                if let Some(x) = first_touch_x(&touches) {
                    self.t.on_drag_move(x);
                }
            }
            InputEvent::PreviousClicked => self.t.previous(),
            InputEvent::NextClicked => self.t.next(),
            InputEvent::BulletClicked(index) => self.t.set_index(index),
            InputEvent::ExpandToggled(index) => {
                if index < self.t.count() {
                    self.t.toggle_expanded(index);
                    changed = true;
                }
            }
            InputEvent::Resized { width } => self.t.set_viewport_width(width),
        }

        self.follow(now_ms);
        changed || self.t.frame() != before
    }

    /// Applies events in order; each is fully committed before the next is looked at.
    ///
    /// Returns `true` if any event changed the rendered state.
    pub fn dispatch(&mut self, events: impl IntoIterator<Item = InputEvent>, now_ms: u64) -> bool {
        let mut changed = false;
        for event in events {
            changed |= self.handle(event, now_ms);
        }
        changed
    }

    /// Advances autoplay and the snap tween. Returns the offset to render.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        self.t.tick(now_ms);
        self.follow(now_ms);

        if let Some(tween) = self.tween {
            self.rendered = tween.sample(now_ms);
            if tween.is_done(now_ms) {
                self.tween = None;
                self.rendered = tween.to;
            }
        }
        self.rendered
    }

    pub fn visuals(&self) -> TimelineVisuals {
        visuals(&self.t)
    }

    /// Points the rendered offset at the timeline: live while dragging, eased otherwise.
    fn follow(&mut self, now_ms: u64) {
        if self.t.is_dragging() {
            self.tween = None;
            self.rendered = self.t.live_offset();
            return;
        }

        let target = self.t.translate_x() as f32;
        match &mut self.tween {
            Some(tween) if tween.to == target => {}
            Some(tween) => tween.retarget(now_ms, target, self.snap_duration_ms),
            None if self.rendered != target => {
                self.tween = Some(Tween::new(
                    self.rendered,
                    target,
                    now_ms,
                    self.snap_duration_ms,
                    self.easing,
                ));
            }
            None => {}
        }
    }
}

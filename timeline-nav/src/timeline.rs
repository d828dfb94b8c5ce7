use alloc::sync::Arc;
use core::cell::Cell;

use crate::{
    AutoplayTimer, DragPhase, DragTracker, Event, ExpandedSet, Frame, Geometry, TimelineOptions,
};

/// The option fields that feed layout, autoplay scheduling or drag gating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Tracked {
    count: usize,
    card_width: u32,
    spacing: u32,
    autoplay: bool,
    autoplay_interval_ms: u64,
    drag_enabled: bool,
}

impl Tracked {
    fn of<C>(options: &TimelineOptions<C>) -> Self {
        Self {
            count: options.count(),
            card_width: options.card_width,
            spacing: options.spacing,
            autoplay: options.autoplay,
            autoplay_interval_ms: options.autoplay_interval_ms,
            drag_enabled: options.drag_enabled,
        }
    }

    fn layout_differs(&self, other: &Self) -> bool {
        self.count != other.count
            || self.card_width != other.card_width
            || self.spacing != other.spacing
    }

    fn schedule_differs(&self, other: &Self) -> bool {
        self.count != other.count
            || self.autoplay != other.autoplay
            || self.autoplay_interval_ms != other.autoplay_interval_ms
    }
}

/// A headless navigation engine for a horizontally scrolling sequence of cards.
///
/// This type is UI-agnostic:
/// - It holds no UI objects and never renders.
/// - The host drives it with commands (`set_index`, `next`, `previous`), drag input
///   (`on_drag_*`), container geometry (`set_viewport_width`) and clock samples (`tick`).
/// - Rendering reads `frame()`, `is_expanded()` and the options.
///
/// Invariants held after every operation:
/// - `current_index < count` (or `0` when there are no events)
/// - `translate_x <= max_translate`
/// - `translate_x == min(current_index * step, max_translate)`
///
/// For raw input dispatch and eased snapping, see the `timeline-nav-adapter` crate.
#[derive(Clone, Debug)]
pub struct Timeline<C = ()> {
    options: TimelineOptions<C>,
    viewport_width: u32,
    geometry: Geometry,
    current_index: usize,
    translate_x: u64,
    drag: DragTracker,
    expanded: ExpandedSet,
    autoplay: AutoplayTimer,
    clock_ms: Option<u64>,
    torn_down: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<C> Timeline<C> {
    /// Creates a timeline at index 0 with nothing expanded.
    ///
    /// If autoplay is enabled, its first period starts at the first clock sample
    /// (`sync_clock` or `tick`).
    pub fn new(options: TimelineOptions<C>) -> Self {
        let viewport_width = options.resolved_viewport_width();
        let geometry = Geometry::compute(
            options.count(),
            options.card_width,
            options.spacing,
            viewport_width,
        );
        tdebug!(
            count = geometry.count,
            step = geometry.step,
            viewport_width,
            max_translate = geometry.max_translate,
            "Timeline::new"
        );
        let mut t = Self {
            options,
            viewport_width,
            geometry,
            current_index: 0,
            translate_x: 0,
            drag: DragTracker::new(),
            expanded: ExpandedSet::new(),
            autoplay: AutoplayTimer::new(),
            clock_ms: None,
            torn_down: false,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        t.reschedule_autoplay();
        t
    }

    pub fn options(&self) -> &TimelineOptions<C> {
        &self.options
    }

    pub fn set_options(&mut self, options: TimelineOptions<C>) {
        let prev = Tracked::of(&self.options);
        self.options = options;
        ttrace!(
            count = self.options.count(),
            card_width = self.options.card_width,
            spacing = self.options.spacing,
            autoplay = self.options.autoplay,
            "Timeline::set_options"
        );
        self.reconcile(prev);
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut TimelineOptions<C>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Timeline<C>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn set_events(&mut self, events: impl Into<Arc<[Event]>>) {
        let prev = Tracked::of(&self.options);
        self.options.events = events.into();
        self.reconcile(prev);
        self.notify();
    }

    pub fn set_card_width(&mut self, card_width: u32) {
        if self.options.card_width == card_width {
            return;
        }
        let prev = Tracked::of(&self.options);
        self.options.card_width = card_width;
        self.reconcile(prev);
        self.notify();
    }

    pub fn set_spacing(&mut self, spacing: u32) {
        if self.options.spacing == spacing {
            return;
        }
        let prev = Tracked::of(&self.options);
        self.options.spacing = spacing;
        self.reconcile(prev);
        self.notify();
    }

    pub fn set_drag_enabled(&mut self, drag_enabled: bool) {
        if self.options.drag_enabled == drag_enabled {
            return;
        }
        let prev = Tracked::of(&self.options);
        self.options.drag_enabled = drag_enabled;
        self.reconcile(prev);
        self.notify();
    }

    pub fn set_autoplay(&mut self, autoplay: bool) {
        if self.options.autoplay == autoplay {
            return;
        }
        let prev = Tracked::of(&self.options);
        self.options.autoplay = autoplay;
        self.reconcile(prev);
        self.notify();
    }

    pub fn set_autoplay_interval_ms(&mut self, interval_ms: u64) {
        if self.options.autoplay_interval_ms == interval_ms {
            return;
        }
        let prev = Tracked::of(&self.options);
        self.options.autoplay_interval_ms = interval_ms;
        self.reconcile(prev);
        self.notify();
    }

    /// Reports the visible container width and re-clamps the committed offset.
    pub fn set_viewport_width(&mut self, viewport_width: u32) {
        if self.viewport_width == viewport_width {
            return;
        }
        ttrace!(viewport_width, "set_viewport_width");
        self.viewport_width = viewport_width;
        self.relayout();
        self.notify();
    }

    fn reconcile(&mut self, prev: Tracked) {
        let next = Tracked::of(&self.options);

        if !next.drag_enabled && self.drag.is_dragging() {
            tdebug!("drag cancelled: dragging disabled mid-gesture");
            self.drag.cancel();
        }
        if next.count < prev.count {
            let pruned = self.expanded.retain_below(next.count);
            if pruned > 0 {
                tdebug!(pruned, count = next.count, "pruned expanded cards");
            }
        }
        if next.layout_differs(&prev) {
            self.relayout();
        }
        if next.schedule_differs(&prev) {
            self.reschedule_autoplay();
        }
    }

    fn relayout(&mut self) {
        self.geometry = Geometry::compute(
            self.options.count(),
            self.options.card_width,
            self.options.spacing,
            self.viewport_width,
        );
        self.commit_index(self.geometry.clamp_index(self.current_index));
    }

    fn commit_index(&mut self, index: usize) {
        self.current_index = index;
        self.translate_x = self.geometry.offset_for_index(index);
        ttrace!(
            index,
            translate_x = self.translate_x,
            max_translate = self.geometry.max_translate,
            "commit_index"
        );
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.options.count()
    }

    pub fn events(&self) -> &[Event] {
        &self.options.events
    }

    pub fn event(&self, index: usize) -> Option<&Event> {
        self.options.events.get(index)
    }

    pub fn custom_component(&self, index: usize) -> Option<&C> {
        self.options.custom_component(index)
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn total_width(&self) -> u64 {
        self.geometry.total_width
    }

    pub fn max_translate(&self) -> u64 {
        self.geometry.max_translate
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn translate_x(&self) -> u64 {
        self.translate_x
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index + 1 < self.count()
    }

    /// Jumps to `index`, clamped into `[0, count)`. No-op without events or after teardown.
    pub fn set_index(&mut self, index: usize) {
        if self.torn_down || self.geometry.is_empty() {
            return;
        }
        let clamped = self.geometry.clamp_index(index);
        if clamped != index {
            tdebug!(index, clamped, "set_index: clamped out-of-range index");
        }
        self.commit_index(clamped);
        self.notify();
    }

    /// Moves by `delta` cards without wrapping at either end.
    pub fn advance(&mut self, delta: isize) {
        if self.geometry.is_empty() {
            return;
        }
        let target = if delta < 0 {
            self.current_index.saturating_sub(delta.unsigned_abs())
        } else {
            self.current_index.saturating_add(delta as usize)
        };
        self.set_index(target);
    }

    pub fn next(&mut self) {
        self.advance(1);
    }

    pub fn previous(&mut self) {
        self.advance(-1);
    }

    /// Moves one card forward, wrapping from the last card to the first.
    pub fn advance_cyclic(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        self.set_index((self.current_index + 1) % count);
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(index)
    }

    pub fn expanded(&self) -> &ExpandedSet {
        &self.expanded
    }

    /// Flips whether the card at `index` shows its long description.
    ///
    /// Returns the new state. Indices past the last event are ignored, as is every toggle
    /// after teardown.
    pub fn toggle_expanded(&mut self, index: usize) -> bool {
        if self.torn_down {
            return self.expanded.contains(index);
        }
        if index >= self.count() {
            twarn!(index, count = self.count(), "toggle_expanded: out-of-bounds index");
            return false;
        }
        let expanded = self.expanded.toggle(index);
        ttrace!(index, expanded, "toggle_expanded");
        self.notify();
        expanded
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn drag_start(&self) -> Option<f32> {
        self.drag.start()
    }

    pub fn drag_offset(&self) -> f32 {
        self.drag.offset()
    }

    /// The offset to render: committed offset plus the uncommitted drag delta.
    pub fn live_offset(&self) -> f32 {
        self.translate_x as f32 + self.drag.offset()
    }

    /// Starts a drag gesture at pointer coordinate `x`.
    ///
    /// Starting while already dragging restarts the gesture from `x`. Returns `false` when
    /// dragging is disabled, there is nothing to drag, or the timeline was torn down.
    pub fn on_drag_start(&mut self, x: f32) -> bool {
        if self.torn_down || !self.options.drag_enabled || self.geometry.is_empty() {
            return false;
        }
        if self.drag.begin(x) {
            tdebug!(x, "on_drag_start: restarted gesture already in progress");
        } else {
            ttrace!(x, "on_drag_start");
        }
        self.notify();
        true
    }

    pub fn on_drag_move(&mut self, x: f32) -> bool {
        if !self.options.drag_enabled {
            return false;
        }
        if !self.drag.update(x) {
            return false;
        }
        self.notify();
        true
    }

    /// Ends the gesture and snaps to the card nearest the released offset.
    ///
    /// Returns the committed index, or `None` when no gesture was active.
    pub fn on_drag_end(&mut self) -> Option<usize> {
        if !self.options.drag_enabled {
            return None;
        }
        let offset = self.drag.finish()?;
        let candidate = self.translate_x as f32 + offset;
        let index = self.geometry.nearest_index(candidate);
        tdebug!(offset, candidate, index, "on_drag_end");

        self.commit_index(index);
        self.resume_autoplay_after_drag();
        self.notify();
        Some(index)
    }

    /// The pointer left the interactive region; ends any gesture like a release.
    pub fn on_pointer_leave(&mut self) -> Option<usize> {
        self.on_drag_end()
    }

    /// Drops the gesture in progress without committing an index.
    pub fn cancel_drag(&mut self) {
        if !self.drag.is_dragging() {
            return;
        }
        self.drag.cancel();
        self.resume_autoplay_after_drag();
        self.notify();
    }

    fn resume_autoplay_after_drag(&mut self) {
        if !self.options.pause_autoplay_while_dragging {
            return;
        }
        if let Some(now_ms) = self.clock_ms {
            self.autoplay.reanchor(now_ms);
        }
    }

    pub fn autoplay_timer(&self) -> &AutoplayTimer {
        &self.autoplay
    }

    pub fn is_autoplay_scheduled(&self) -> bool {
        self.autoplay.is_scheduled()
    }

    /// Last clock sample seen by `sync_clock` or `tick`.
    pub fn clock_ms(&self) -> Option<u64> {
        self.clock_ms
    }

    /// Records the host clock without firing anything.
    ///
    /// A pending autoplay schedule starts its first period here.
    pub fn sync_clock(&mut self, now_ms: u64) {
        self.clock_ms = Some(now_ms);
        if self.autoplay.is_scheduled() && self.autoplay.due_ms().is_none() {
            self.autoplay.reanchor(now_ms);
        }
    }

    /// Samples the autoplay timer at `now_ms` and advances once per elapsed period.
    ///
    /// Returns the number of periods that fired.
    pub fn tick(&mut self, now_ms: u64) -> u64 {
        if self.torn_down {
            return 0;
        }
        self.clock_ms = Some(now_ms);
        if self.options.pause_autoplay_while_dragging && self.drag.is_dragging() {
            return 0;
        }
        let fired = self.autoplay.poll(now_ms);
        if fired == 0 {
            return 0;
        }
        let count = self.count();
        if count > 1 {
            let steps = (fired % count as u64) as usize;
            let target = (self.current_index + steps) % count;
            tdebug!(now_ms, fired, target, "autoplay fired");
            self.commit_index(target);
            self.notify();
        }
        fired
    }

    fn reschedule_autoplay(&mut self) {
        self.autoplay.cancel();
        if self.torn_down {
            return;
        }
        if self.options.autoplay && self.count() > 1 {
            // The new period starts at the next clock sample, never at a stale one.
            self.autoplay.schedule(self.options.autoplay_interval_ms, None);
            tdebug!(interval_ms = self.autoplay.interval_ms(), "autoplay scheduled");
        } else {
            ttrace!("autoplay idle");
        }
    }

    /// Releases the timeline: cancels autoplay and any gesture in progress.
    ///
    /// After teardown, `tick` never advances, option changes cannot re-arm autoplay, and
    /// navigation, drag and expansion commands are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        tdebug!(index = self.current_index, "Timeline::teardown");
        self.torn_down = true;
        self.autoplay.cancel();
        self.drag.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Returns a snapshot of the navigation state for rendering.
    pub fn frame(&self) -> Frame {
        Frame {
            current_index: self.current_index,
            count: self.count(),
            translate_x: self.translate_x,
            max_translate: self.geometry.max_translate,
            drag_offset: self.drag.offset(),
            live_offset: self.live_offset(),
            is_dragging: self.drag.is_dragging(),
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
        }
    }
}

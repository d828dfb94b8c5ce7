/// Phase of a single-pointer drag gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Tracks one drag gesture as a transient offset on top of the committed scroll position.
///
/// The tracker never touches the committed offset itself. `Timeline` reads `offset()` while
/// rendering and turns `finish()` into an index commit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    phase: DragPhase,
    start: f32,
    offset: f32,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Pointer coordinate where the current gesture began, if one is active.
    pub fn start(&self) -> Option<f32> {
        self.is_dragging().then_some(self.start)
    }

    /// Signed pixel delta of the current gesture; `0.0` when idle.
    ///
    /// Positive values move the timeline toward later cards.
    pub fn offset(&self) -> f32 {
        if self.is_dragging() { self.offset } else { 0.0 }
    }

    /// Begins a gesture at `x`. A gesture already in progress is restarted from `x`.
    ///
    /// Returns `true` if a gesture was restarted.
    pub fn begin(&mut self, x: f32) -> bool {
        let restarted = self.is_dragging();
        self.phase = DragPhase::Dragging;
        self.start = x;
        self.offset = 0.0;
        restarted
    }

    /// Updates the gesture with the pointer at `x`. Ignored when idle.
    pub fn update(&mut self, x: f32) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.offset = self.start - x;
        true
    }

    /// Ends the gesture and returns its final offset, or `None` if no gesture was active.
    pub fn finish(&mut self) -> Option<f32> {
        if !self.is_dragging() {
            return None;
        }
        let offset = self.offset;
        self.cancel();
        Some(offset)
    }

    /// Drops the gesture without reporting an offset.
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
        self.start = 0.0;
        self.offset = 0.0;
    }
}

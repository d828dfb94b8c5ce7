/// A lightweight snapshot of everything a renderer needs for one frame of navigation.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub current_index: usize,
    pub count: usize,
    /// Committed offset in pixels.
    pub translate_x: u64,
    pub max_translate: u64,
    /// Uncommitted delta of the gesture in progress.
    pub drag_offset: f32,
    /// `translate_x + drag_offset`: the offset to render.
    pub live_offset: f32,
    pub is_dragging: bool,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

use alloc::vec::Vec;

/// One contact point of a touch event, in the same coordinate space as pointer events.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchPoint {
    pub x: f32,
}

/// Raw input forwarded by the rendering surface.
///
/// Events are applied strictly in the order they are handed to the controller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp,
    /// The pointer left the interactive region.
    PointerLeave,
    TouchStart { touches: Vec<TouchPoint> },
    TouchMove { touches: Vec<TouchPoint> },
    TouchEnd,
    TouchCancel,
    PreviousClicked,
    NextClicked,
    BulletClicked(usize),
    ExpandToggled(usize),
    /// The container's visible width changed.
    Resized { width: u32 },
}

impl InputEvent {
    /// A single-finger touch start at `x`.
    pub fn touch_start(x: f32) -> Self {
        Self::TouchStart {
            touches: alloc::vec![TouchPoint { x }],
        }
    }

    /// A single-finger touch move to `x`.
    pub fn touch_move(x: f32) -> Self {
        Self::TouchMove {
            touches: alloc::vec![TouchPoint { x }],
        }
    }
}

/// Only the first contact drives the gesture.
pub(crate) fn first_touch_x(touches: &[TouchPoint]) -> Option<f32> {
    touches.first().map(|p| p.x)
}

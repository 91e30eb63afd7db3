//! Input abstraction layer.
//!
//! Platform gesture recognizers (mouse, touch, pen) are normalized into
//! `InputEvent`s in canvas coordinates before they reach the drag tool.

/// A normalized pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Single tap or click without movement: selects or deselects.
    Tap { x: f32, y: f32 },

    /// Pointer pressed; starts a drag of the selected item.
    PointerDown { x: f32, y: f32 },

    /// Pointer moved while pressed.
    PointerMove { x: f32, y: f32 },

    /// Pointer released.
    PointerUp { x: f32, y: f32 },

    /// The gesture was cancelled or failed (system interruption, lost touch).
    PointerCancel,
}

impl InputEvent {
    /// Extract position if the event carries one.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::Tap { x, y }
            | Self::PointerDown { x, y }
            | Self::PointerMove { x, y }
            | Self::PointerUp { x, y } => Some((*x, *y)),
            Self::PointerCancel => None,
        }
    }

    /// Whether this event ends a drag gesture.
    pub fn ends_gesture(&self) -> bool {
        matches!(self, Self::PointerUp { .. } | Self::PointerCancel)
    }
}

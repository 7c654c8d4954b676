//! Pointer events and event results.

use crate::primitives::Point;

/// Mouse button types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Pointer events in control-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum MouseEvent {
    /// Mouse button pressed.
    ButtonPressed {
        button: MouseButton,
        position: Point,
    },

    /// Mouse button released. A left release is a tap.
    ButtonReleased {
        button: MouseButton,
        position: Point,
    },

    /// Mouse cursor moved.
    CursorMoved { position: Point },
}

impl MouseEvent {
    /// A left-button tap at `position`.
    pub fn tap(position: Point) -> Self {
        Self::ButtonReleased {
            button: MouseButton::Left,
            position,
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Self::ButtonPressed { position, .. }
            | Self::ButtonReleased { position, .. }
            | Self::CursorMoved { position } => *position,
        }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult<M> {
    /// Event was ignored, propagate to parent.
    Ignored,

    /// Event was captured, don't propagate.
    Captured,

    /// Event produced a message for the application.
    Message(M),
}

impl<M> EventResult<M> {
    /// Check if the event was handled (captured or produced a message).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }

    /// Convert to an Option<M>, discarding Ignored and Captured.
    pub fn into_message(self) -> Option<M> {
        match self {
            EventResult::Message(m) => Some(m),
            _ => None,
        }
    }
}

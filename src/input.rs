use crate::geometry::Point;

/// Pointer input events that can be routed to the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer button was pressed
    PointerDown { pos: Point },
    /// Pointer button was released
    PointerUp { pos: Point },
}

impl InputEvent {
    /// The position the event occurred at.
    pub fn pos(&self) -> Point {
        match self {
            InputEvent::PointerDown { pos } | InputEvent::PointerUp { pos } => *pos,
        }
    }
}

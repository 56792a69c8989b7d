//! Mouse event handling

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Tweets moved per wheel notch
const SCROLL_STEP: usize = 1;

/// Actions triggered by mouse events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    None,
    Click { row: u16, col: u16 },
    ScrollUp(usize),
    ScrollDown(usize),
}

/// Translate a mouse event into an action
pub fn handle_mouse_event(mouse: MouseEvent) -> MouseAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => MouseAction::Click {
            row: mouse.row,
            col: mouse.column,
        },
        MouseEventKind::ScrollUp => MouseAction::ScrollUp(SCROLL_STEP),
        MouseEventKind::ScrollDown => MouseAction::ScrollDown(SCROLL_STEP),
        _ => MouseAction::None,
    }
}

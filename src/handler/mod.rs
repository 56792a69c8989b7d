//! Handler module - Input event handling

pub mod action;
pub mod key;
pub mod mouse;

pub use action::{handle_action, share_text, switch_tab, ActionResult};
pub use key::{handle_key_event, KeyAction};
pub use mouse::{handle_mouse_event, MouseAction};

//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{AppState, FeedTab, ViewMode};

/// Actions that can result from key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Focus the next tweet
    MoveDown,
    /// Focus the previous tweet
    MoveUp,
    /// Focus the first tweet
    MoveToTop,
    /// Focus the last loaded tweet
    MoveToBottom,
    /// Move focus by a screenful
    PageDown,
    PageUp,
    /// Switch to the given tab
    SelectTab(FeedTab),
    /// Switch to the other tab
    ToggleTab,
    /// Follow or unfollow the focused tweet's author
    ToggleFollow,
    /// Copy the focused tweet to the system clipboard
    Share,
    /// Compose a tweet (no backend)
    Compose,
    /// Show help popup
    ShowHelp,
    /// Close popup / clear message
    Cancel,
}

/// Handle key event and return the resulting action
pub fn handle_key_event(state: &AppState, key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match state.mode {
        ViewMode::Browse => handle_browse_mode(key),
        ViewMode::Help => handle_help_mode(key),
    }
}

/// Handle keys in browse mode
fn handle_browse_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,

        // Navigation
        KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveDown,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveUp,
        KeyCode::Home | KeyCode::Char('g') => KeyAction::MoveToTop,
        KeyCode::End | KeyCode::Char('G') => KeyAction::MoveToBottom,
        KeyCode::PageDown | KeyCode::Char(' ') => KeyAction::PageDown,
        KeyCode::PageUp | KeyCode::Char('b') => KeyAction::PageUp,

        // Tabs
        KeyCode::Char('1') => KeyAction::SelectTab(FeedTab::ForYou),
        KeyCode::Char('2') => KeyAction::SelectTab(FeedTab::Following),
        KeyCode::Tab | KeyCode::BackTab => KeyAction::ToggleTab,

        // Tweet actions
        KeyCode::Char('f') => KeyAction::ToggleFollow,
        KeyCode::Char('y') => KeyAction::Share,
        KeyCode::Char('n') => KeyAction::Compose,

        KeyCode::Char('?') => KeyAction::ShowHelp,
        _ => KeyAction::None,
    }
}

/// Handle keys in help mode
fn handle_help_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter => KeyAction::Cancel,
        _ => KeyAction::None,
    }
}

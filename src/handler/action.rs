//! Action execution handler
//!
//! This module handles the execution of KeyActions, translating them into
//! state changes on the UI state and the feed controller.

use tracing::warn;

use crate::core::{AppState, FeedCard, FeedController, FeedTab, FetchTicket, ViewMode};
use crate::handler::key::KeyAction;
use crate::integrate::exit_code;

/// Result of action execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Continue the event loop
    Continue,
    /// A page fetch was started and must be handed to the fetcher
    Fetch(FetchTicket),
    /// Quit with the given exit code
    Quit(i32),
}

/// Text placed on the clipboard for a tweet
pub fn share_text(card: &FeedCard) -> String {
    format!("{} ({}): {}", card.user.username, card.user.at_handle(), card.tweet.content)
}

/// Switch tabs and scroll back to the top
pub fn switch_tab(state: &mut AppState, controller: &mut FeedController, tab: FeedTab) -> ActionResult {
    state.reset_scroll();
    state.clear_message();
    match controller.select_tab(tab) {
        Some(ticket) => ActionResult::Fetch(ticket),
        None => ActionResult::Continue,
    }
}

/// Handle a KeyAction and update state accordingly
///
/// `page_cards` is the number of cards a page-up/down moves.
pub fn handle_action(
    action: KeyAction,
    state: &mut AppState,
    controller: &mut FeedController,
    page_cards: usize,
) -> ActionResult {
    let len = controller.feed_cards(controller.active_tab()).len();

    match action {
        KeyAction::None => {}
        KeyAction::Quit => {
            state.should_quit = true;
            return ActionResult::Quit(exit_code::SUCCESS);
        }
        KeyAction::Cancel => {
            if state.mode == ViewMode::Help {
                state.mode = ViewMode::Browse;
            } else {
                state.clear_message();
            }
        }
        KeyAction::MoveDown => {
            if state.focus_index + 1 < len {
                state.focus_index += 1;
            }
        }
        KeyAction::MoveUp => {
            state.focus_index = state.focus_index.saturating_sub(1);
        }
        KeyAction::MoveToTop => {
            state.focus_index = 0;
        }
        KeyAction::MoveToBottom => {
            state.focus_index = len.saturating_sub(1);
        }
        KeyAction::PageDown => {
            state.focus_index = (state.focus_index + page_cards.max(1)).min(len.saturating_sub(1));
        }
        KeyAction::PageUp => {
            state.focus_index = state.focus_index.saturating_sub(page_cards.max(1));
        }
        KeyAction::SelectTab(tab) => {
            return switch_tab(state, controller, tab);
        }
        KeyAction::ToggleTab => {
            let tab = controller.active_tab().toggle();
            return switch_tab(state, controller, tab);
        }
        KeyAction::ToggleFollow => {
            let focused = controller
                .feed_cards(controller.active_tab())
                .get(state.focus_index)
                .map(|card| (card.user.id.clone(), card.user.at_handle()));
            if let Some((user_id, handle)) = focused {
                if controller.toggle_follow(&user_id) {
                    state.set_message(format!("Following {}", handle));
                } else {
                    state.set_message(format!("Unfollowed {}", handle));
                }
            }
        }
        KeyAction::Share => {
            let text = controller
                .feed_cards(controller.active_tab())
                .get(state.focus_index)
                .map(share_text);
            if let Some(text) = text {
                match arboard::Clipboard::new().and_then(|mut c| c.set_text(text)) {
                    Ok(()) => state.set_message("Copied tweet to clipboard"),
                    Err(e) => {
                        warn!(error = %e, "clipboard unavailable");
                        state.set_message(format!("Clipboard unavailable: {}", e));
                    }
                }
            }
        }
        KeyAction::Compose => {
            state.set_message("Composing is not available in this client");
        }
        KeyAction::ShowHelp => {
            state.mode = ViewMode::Help;
        }
    }

    ActionResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemorySource;
    use crate::model::{Tweet, User};

    fn controller(tweet_count: usize) -> FeedController {
        let users: Vec<User> = (0..12)
            .map(|i| User {
                id: format!("u{}", i),
                username: format!("User {}", i),
                handle: format!("user{}", i),
                avatar: String::new(),
                verified: false,
            })
            .collect();
        let tweets: Vec<Tweet> = (0..tweet_count)
            .map(|i| Tweet {
                id: format!("t{}", i),
                user_id: format!("u{}", i % 12),
                content: format!("tweet {}", i),
                likes: 0,
                retweets: 0,
                replies: 0,
                time_ago: "5m".to_string(),
                images: None,
            })
            .collect();
        let mut controller = FeedController::default();
        controller.initialize(&MemorySource::new(users, tweets));
        controller
    }

    #[test]
    fn test_move_is_clamped_to_feed() {
        let mut c = controller(3);
        c.fetch_page(FeedTab::ForYou);
        let mut state = AppState::new();

        for _ in 0..5 {
            handle_action(KeyAction::MoveDown, &mut state, &mut c, 5);
        }
        assert_eq!(state.focus_index, 2);

        handle_action(KeyAction::PageUp, &mut state, &mut c, 5);
        assert_eq!(state.focus_index, 0);

        handle_action(KeyAction::MoveToBottom, &mut state, &mut c, 5);
        assert_eq!(state.focus_index, 2);
    }

    #[test]
    fn test_select_tab_returns_fetch_ticket() {
        let mut c = controller(30);
        let mut state = AppState::new();
        state.focus_index = 4;

        let result = handle_action(KeyAction::SelectTab(FeedTab::Following), &mut state, &mut c, 5);
        match result {
            ActionResult::Fetch(ticket) => {
                assert_eq!(ticket.tab, FeedTab::Following);
                assert_eq!(ticket.cursor, 1);
            }
            other => panic!("expected fetch, got {:?}", other),
        }
        assert_eq!(state.focus_index, 0);
        assert_eq!(c.active_tab(), FeedTab::Following);
    }

    #[test]
    fn test_toggle_follow_focused_author() {
        let mut c = controller(30);
        c.fetch_page(FeedTab::ForYou);
        c.fetch_page(FeedTab::ForYou);
        let mut state = AppState::new();
        state.focus_index = 11; // authored by u11, not followed initially

        handle_action(KeyAction::ToggleFollow, &mut state, &mut c, 5);
        assert!(c.followed().contains("u11"));
        assert_eq!(state.message.as_deref(), Some("Following @user11"));

        handle_action(KeyAction::ToggleFollow, &mut state, &mut c, 5);
        assert!(!c.followed().contains("u11"));
    }

    #[test]
    fn test_help_and_cancel() {
        let mut c = controller(1);
        let mut state = AppState::new();
        handle_action(KeyAction::ShowHelp, &mut state, &mut c, 5);
        assert_eq!(state.mode, ViewMode::Help);
        handle_action(KeyAction::Cancel, &mut state, &mut c, 5);
        assert_eq!(state.mode, ViewMode::Browse);
    }

    #[test]
    fn test_quit() {
        let mut c = controller(1);
        let mut state = AppState::new();
        let result = handle_action(KeyAction::Quit, &mut state, &mut c, 5);
        assert_eq!(result, ActionResult::Quit(exit_code::SUCCESS));
        assert!(state.should_quit);
    }

    #[test]
    fn test_share_text() {
        let mut c = controller(1);
        c.fetch_page(FeedTab::ForYou);
        let cards = c.feed_cards(FeedTab::ForYou);
        assert_eq!(share_text(&cards[0]), "User 0 (@user0): tweet 0");
    }
}

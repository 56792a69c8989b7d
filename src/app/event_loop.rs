//! Main event loop for the application

use std::io::Stdout;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;
use tracing::{debug, info};

use crate::app::{Config, PageFetcher};
use crate::core::{AppState, FeedController, FetchOutcome, ViewMode};
use crate::data::DirSource;
use crate::handler::{
    handle_action, handle_key_event, handle_mouse_event, switch_tab, ActionResult, KeyAction,
    MouseAction,
};
use crate::integrate::exit_code;
use crate::render::{card_heights, feed_inner, tab_at_column};

use super::render::{frame_layout, render_frame, FrameLayout, RenderContext};

/// Spinner frame duration
const SPINNER_INTERVAL: Duration = Duration::from_millis(120);

/// Result of running the app
pub struct AppResult {
    pub exit_code: i32,
}

/// Main event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: Config,
) -> anyhow::Result<AppResult> {
    let mut state = AppState::new();
    state.mouse_enabled = config.mouse_enabled;
    state.prefetch_margin = config.prefetch_margin;

    let mut controller = FeedController::new(config.initial_follow_count);
    controller.initialize(&DirSource::new(&config.data_dir));

    let mut fetcher = PageFetcher::new(config.fetch_delay);
    if let Some(ticket) = controller.select_tab(config.initial_tab) {
        fetcher.request(ticket);
    }

    let started = Instant::now();

    loop {
        // Apply pages the worker has finished
        while let Some(ticket) = fetcher.try_recv() {
            match controller.complete_fetch(ticket) {
                FetchOutcome::Applied {
                    tab,
                    count,
                    has_more,
                } => debug!(%tab, count, has_more, "page applied"),
                FetchOutcome::Stale { tab } => debug!(%tab, "stale page dropped"),
            }
        }
        if let Some(ticket) = controller.ensure_active_loaded() {
            fetcher.request(ticket);
        }

        // Measure cards against the current terminal size
        let term_size = terminal.size()?;
        let layout = frame_layout(Rect::new(0, 0, term_size.width, term_size.height));
        let inner = feed_inner(layout.feed);
        let tab = controller.active_tab();
        let heights = card_heights(&controller.feed_cards(tab), inner.width as usize);
        let visible = inner.height as usize;

        state.clamp_focus(heights.len());
        state.adjust_viewport(&heights, visible);

        // Infinite scroll: ask for the next page once the end is in sight
        if !controller.is_loading()
            && controller.tab_state(tab).has_more
            && state.is_near_end(&heights, visible)
        {
            if let Some(ticket) = controller.notify_near_end(tab) {
                fetcher.request(ticket);
            }
        }

        let tick = (started.elapsed().as_millis() / SPINNER_INTERVAL.as_millis()) as usize;
        terminal.draw(|frame| {
            render_frame(
                frame,
                RenderContext {
                    state: &state,
                    controller: &controller,
                    tick,
                },
            )
        })?;

        if event::poll(Duration::from_millis(60))? {
            let result = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = handle_key_event(&state, key);
                    let page_cards = page_cards(&state, &heights, visible);
                    handle_action(action, &mut state, &mut controller, page_cards)
                }
                Event::Mouse(mouse) if state.mouse_enabled => {
                    let action = handle_mouse_event(mouse);
                    handle_mouse_action(action, &layout, &heights, &mut state, &mut controller)
                }
                _ => ActionResult::Continue,
            };

            match result {
                ActionResult::Continue => {}
                ActionResult::Fetch(ticket) => fetcher.request(ticket),
                ActionResult::Quit(code) => {
                    info!(code, "quitting");
                    return Ok(AppResult { exit_code: code });
                }
            }
        }

        if state.should_quit {
            return Ok(AppResult {
                exit_code: exit_code::SUCCESS,
            });
        }
    }
}

/// Number of cards currently on screen, used as the page-up/down step
fn page_cards(state: &AppState, heights: &[usize], visible: usize) -> usize {
    state
        .last_visible_index(heights, visible)
        .map(|last| last + 1 - state.viewport_top.min(last))
        .unwrap_or(1)
        .max(1)
}

/// Apply a mouse action: tab clicks, card focus and wheel scrolling
fn handle_mouse_action(
    action: MouseAction,
    layout: &FrameLayout,
    heights: &[usize],
    state: &mut AppState,
    controller: &mut FeedController,
) -> ActionResult {
    if state.mode == ViewMode::Help {
        return ActionResult::Continue;
    }

    match action {
        MouseAction::Click { row, col } => {
            if row == layout.header.y {
                if let Some(tab) = tab_at_column(col) {
                    return switch_tab(state, controller, tab);
                }
                return ActionResult::Continue;
            }

            let inner = feed_inner(layout.feed);
            if row >= inner.y && row < inner.y + inner.height {
                if let Some(idx) = state.card_at_row(heights, (row - inner.y) as usize) {
                    state.focus_index = idx;
                }
            }
            ActionResult::Continue
        }
        MouseAction::ScrollUp(amount) => {
            state.focus_index = state.focus_index.saturating_sub(amount);
            ActionResult::Continue
        }
        MouseAction::ScrollDown(amount) => {
            handle_action(KeyAction::PageDown, state, controller, amount)
        }
        MouseAction::None => ActionResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedTab;
    use crate::data::MemorySource;
    use crate::model::{Tweet, User};

    fn controller() -> FeedController {
        let users: Vec<User> = (0..3)
            .map(|i| User {
                id: format!("u{}", i),
                username: format!("User {}", i),
                handle: format!("user{}", i),
                avatar: String::new(),
                verified: false,
            })
            .collect();
        let tweets: Vec<Tweet> = (0..5)
            .map(|i| Tweet {
                id: format!("t{}", i),
                user_id: format!("u{}", i % 3),
                content: format!("tweet {}", i),
                likes: 0,
                retweets: 0,
                replies: 0,
                time_ago: "1h".to_string(),
                images: None,
            })
            .collect();
        let mut controller = FeedController::new(1);
        controller.initialize(&MemorySource::new(users, tweets));
        if let Some(ticket) = controller.select_tab(FeedTab::ForYou) {
            controller.complete_fetch(ticket);
        }
        controller
    }

    #[test]
    fn test_page_cards() {
        let mut state = AppState::new();
        let heights = [4; 10];
        assert_eq!(page_cards(&state, &heights, 12), 3);
        state.viewport_top = 9;
        assert_eq!(page_cards(&state, &heights, 12), 1);
        assert_eq!(page_cards(&state, &[], 12), 1);
    }

    #[test]
    fn test_header_click_switches_tab() {
        let layout = frame_layout(Rect::new(0, 0, 80, 24));
        let mut state = AppState::new();
        let mut controller = controller();

        let col = 20; // inside " 2 Following "
        let result = handle_mouse_action(
            MouseAction::Click { row: 0, col },
            &layout,
            &[],
            &mut state,
            &mut controller,
        );

        assert!(matches!(result, ActionResult::Fetch(t) if t.tab == FeedTab::Following));
        assert_eq!(controller.active_tab(), FeedTab::Following);
    }

    #[test]
    fn test_feed_click_focuses_card() {
        let layout = frame_layout(Rect::new(0, 0, 80, 24));
        let mut state = AppState::new();
        let mut controller = controller();
        let heights = [4, 4, 4, 4, 4];

        // Feed border at row 2, first card rows 3..7, second 7..11
        let result = handle_mouse_action(
            MouseAction::Click { row: 8, col: 10 },
            &layout,
            &heights,
            &mut state,
            &mut controller,
        );

        assert_eq!(result, ActionResult::Continue);
        assert_eq!(state.focus_index, 1);
    }

    #[test]
    fn test_wheel_moves_focus() {
        let layout = frame_layout(Rect::new(0, 0, 80, 24));
        let mut state = AppState::new();
        let mut controller = controller();

        handle_mouse_action(
            MouseAction::ScrollDown(1),
            &layout,
            &[],
            &mut state,
            &mut controller,
        );
        assert_eq!(state.focus_index, 1);

        handle_mouse_action(MouseAction::ScrollUp(1), &layout, &[], &mut state, &mut controller);
        assert_eq!(state.focus_index, 0);
    }
}

//! Application (UI) state management
//!
//! Everything the presentation layer needs besides the feed itself: focus,
//! scroll position, mode and the status message.

use super::ViewMode;

/// Cards from the end of the feed at which the next page is requested
pub const DEFAULT_PREFETCH_MARGIN: usize = 2;

/// Main UI state
pub struct AppState {
    /// Focused card index in the active feed
    pub focus_index: usize,
    /// First card shown (scroll position)
    pub viewport_top: usize,
    /// Current view mode
    pub mode: ViewMode,
    /// Status message
    pub message: Option<String>,
    /// Exit flag
    pub should_quit: bool,
    /// Whether mouse events are handled
    pub mouse_enabled: bool,
    /// Near-end distance, in cards
    pub prefetch_margin: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            focus_index: 0,
            viewport_top: 0,
            mode: ViewMode::Browse,
            message: None,
            should_quit: false,
            mouse_enabled: true,
            prefetch_margin: DEFAULT_PREFETCH_MARGIN,
        }
    }

    /// Back to the top of a fresh feed (after a tab switch)
    pub fn reset_scroll(&mut self) {
        self.focus_index = 0;
        self.viewport_top = 0;
    }

    /// Keep `focus_index` inside a feed of `len` cards
    pub fn clamp_focus(&mut self, len: usize) {
        if len == 0 {
            self.focus_index = 0;
        } else if self.focus_index >= len {
            self.focus_index = len - 1;
        }
    }

    /// Adjust viewport to keep the focused card visible.
    ///
    /// `heights` holds the rendered height of every card in rows.
    pub fn adjust_viewport(&mut self, heights: &[usize], visible_height: usize) {
        if heights.is_empty() {
            self.viewport_top = 0;
            return;
        }
        let focus = self.focus_index.min(heights.len() - 1);
        if focus < self.viewport_top {
            self.viewport_top = focus;
            return;
        }
        while self.viewport_top < focus
            && heights[self.viewport_top..=focus].iter().sum::<usize>() > visible_height
        {
            self.viewport_top += 1;
        }
    }

    /// Index of the last card that fits (at least partly) in the viewport
    pub fn last_visible_index(&self, heights: &[usize], visible_height: usize) -> Option<usize> {
        if heights.is_empty() {
            return None;
        }
        let mut used = 0;
        let mut last = self.viewport_top.min(heights.len() - 1);
        for (i, h) in heights.iter().enumerate().skip(self.viewport_top) {
            if used >= visible_height {
                break;
            }
            last = i;
            used += h;
        }
        Some(last)
    }

    /// True when the last rendered card is within `prefetch_margin` of the end
    pub fn is_near_end(&self, heights: &[usize], visible_height: usize) -> bool {
        self.last_visible_index(heights, visible_height)
            .is_some_and(|last| last + self.prefetch_margin + 1 >= heights.len())
    }

    /// Card drawn at `row` rows below the top of the viewport
    pub fn card_at_row(&self, heights: &[usize], row: usize) -> Option<usize> {
        let mut top = 0;
        for (i, h) in heights.iter().enumerate().skip(self.viewport_top) {
            if row < top + h {
                return Some(i);
            }
            top += h;
        }
        None
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

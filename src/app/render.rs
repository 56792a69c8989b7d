//! Rendering helpers for the event loop

use ratatui::prelude::*;

use crate::core::{AppState, FeedController};
use crate::render::{render_feed, render_help_popup, render_status_bar, render_tab_bar};

/// Screen areas of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    /// Title and tab bar
    pub header: Rect,
    /// Bordered tweet list
    pub feed: Rect,
    pub status: Rect,
}

/// Split the screen into header, feed and status bar
pub fn frame_layout(area: Rect) -> FrameLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    FrameLayout {
        header: chunks[0],
        feed: chunks[1],
        status: chunks[2],
    }
}

/// Context for rendering a frame
pub struct RenderContext<'a> {
    pub state: &'a AppState,
    pub controller: &'a FeedController,
    /// Animation counter for the loading spinner
    pub tick: usize,
}

/// Render a complete frame
pub fn render_frame(frame: &mut Frame, ctx: RenderContext) {
    let layout = frame_layout(frame.area());

    render_tab_bar(frame, ctx.controller, ctx.tick, layout.header);
    render_feed(frame, ctx.state, ctx.controller, layout.feed);
    render_status_bar(frame, ctx.state, ctx.controller, layout.status);

    // Render help popup if in Help mode
    render_help_popup(frame, ctx.state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout() {
        let layout = frame_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header, Rect::new(0, 0, 80, 2));
        assert_eq!(layout.feed, Rect::new(0, 2, 80, 19));
        assert_eq!(layout.status, Rect::new(0, 21, 80, 3));
    }
}

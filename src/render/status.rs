//! Status bar and help popup rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::{AppState, FeedController, ViewMode};

/// Render the status bar
pub fn render_status_bar(
    frame: &mut Frame,
    state: &AppState,
    controller: &FeedController,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    // Left: message, else load diagnostics, else help hint
    let left = if let Some(ref msg) = state.message {
        Line::from(format!(" {}", msg))
    } else if let Some(err) = controller.load_errors().first() {
        Line::from(vec![Span::styled(
            format!(" Load failed: {}", err),
            Style::default().fg(Color::Red),
        )])
    } else {
        Line::from(" ? for help")
    };
    let msg_widget = Paragraph::new(left).block(Block::default().borders(Borders::ALL));
    frame.render_widget(msg_widget, chunks[0]);

    let stats_widget =
        Paragraph::new(feed_stats(controller)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(stats_widget, chunks[1]);
}

/// Right-hand status text: shown/total, page and followed count
pub fn feed_stats(controller: &FeedController) -> String {
    let tab = controller.active_tab();
    let tab_state = controller.tab_state(tab);
    format!(
        "{}/{} tweets | page {} | following {}",
        controller.feed(tab).len(),
        controller.tweets().len(),
        tab_state.cursor.saturating_sub(1),
        controller.followed().len()
    )
}

/// Create a centered rect with fixed height
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render help popup overlay
pub fn render_help_popup(frame: &mut Frame, state: &AppState) {
    if state.mode != ViewMode::Help {
        return;
    }

    let heading = Style::default().add_modifier(Modifier::BOLD);
    let help_lines = vec![
        Line::from(vec![Span::styled("Navigation", heading)]),
        Line::from("  j/\u{2193}      Next tweet"),
        Line::from("  k/\u{2191}      Previous tweet"),
        Line::from("  g        Go to top"),
        Line::from("  G        Go to bottom (loads more)"),
        Line::from("  PgUp/Dn  Page up / down"),
        Line::from(""),
        Line::from(vec![Span::styled("Tabs", heading)]),
        Line::from("  1        For You"),
        Line::from("  2        Following"),
        Line::from("  Tab      Switch tab"),
        Line::from(""),
        Line::from(vec![Span::styled("Tweet", heading)]),
        Line::from("  f        Follow / unfollow author"),
        Line::from("  y        Copy tweet to clipboard"),
        Line::from("  n        Compose"),
        Line::from(""),
        Line::from("  q/Esc    Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let height = (help_lines.len() + 2) as u16; // +2 for border
    let area = centered_rect(50, height, frame.area());

    let popup = Paragraph::new(help_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

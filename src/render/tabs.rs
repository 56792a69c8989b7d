//! Header and tab bar rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::{FeedController, FeedTab};

/// Frames of the loading spinner
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

const HOME_LABEL: &str = " Home ";

fn tab_label(i: usize, tab: FeedTab) -> String {
    format!(" {} {} ", i + 1, tab.display_name())
}

/// Render the "Home" header with both tabs and a loading spinner
pub fn render_tab_bar(frame: &mut Frame, controller: &FeedController, tick: usize, area: Rect) {
    let mut spans = vec![Span::styled(
        HOME_LABEL,
        Style::default().add_modifier(Modifier::BOLD),
    )];

    for (i, tab) in FeedTab::ALL.iter().enumerate() {
        let label = tab_label(i, *tab);
        if *tab == controller.active_tab() {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(Color::Gray)));
        }
        spans.push(Span::raw(" "));
    }

    if controller.is_loading() {
        spans.push(Span::styled(
            format!(" {} loading", SPINNER[tick % SPINNER.len()]),
            Style::default().fg(Color::Yellow),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(para, area);
}

/// Tab label under a click on the header row
pub fn tab_at_column(col: u16) -> Option<FeedTab> {
    let mut x = HOME_LABEL.len() as u16;
    for (i, tab) in FeedTab::ALL.iter().enumerate() {
        let width = tab_label(i, *tab).chars().count() as u16;
        if col >= x && col < x + width {
            return Some(*tab);
        }
        // Label plus the separating space
        x += width + 1;
    }
    None
}

//! Tweet card rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::format::format_count;
use crate::core::{AppState, FeedCard, FeedController};

/// Left padding of card bodies
const INDENT: &str = "  ";

/// Render the active feed, the loading row and the end-of-feed notice
pub fn render_feed(frame: &mut Frame, state: &AppState, controller: &FeedController, area: Rect) {
    let tab = controller.active_tab();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", tab.display_name()));
    let inner = feed_inner(area);
    let width = inner.width as usize;
    let height = inner.height as usize;

    let cards = controller.feed_cards(tab);
    let mut lines: Vec<Line> = Vec::new();
    for (i, card) in cards.iter().enumerate().skip(state.viewport_top) {
        if lines.len() >= height {
            break;
        }
        lines.extend(card_lines(card, width, i == state.focus_index));
    }

    if lines.len() < height {
        if controller.is_loading() {
            lines.push(Line::styled(
                format!("{}Loading...", INDENT),
                Style::default().fg(Color::Yellow),
            ));
        } else if let Some(notice) = controller.end_notice(tab) {
            lines.push(Line::styled(
                format!("{}{}", INDENT, notice),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Area inside the feed border
pub fn feed_inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Rendered height of every card, in the same order as `cards`
pub fn card_heights(cards: &[FeedCard], width: usize) -> Vec<usize> {
    cards
        .iter()
        .map(|card| card_lines(card, width, false).len())
        .collect()
}

/// Lines of a single card: header, wrapped text, images, counts, spacer
pub fn card_lines(card: &FeedCard, width: usize, focused: bool) -> Vec<Line<'static>> {
    let user = card.user;
    let tweet = card.tweet;

    let mut name_style = Style::default().add_modifier(Modifier::BOLD);
    if focused {
        name_style = name_style.bg(Color::DarkGray);
    }
    let marker = if focused { "\u{258c} " } else { "  " };

    let mut header = vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(user.username.clone(), name_style),
    ];
    if user.verified {
        header.push(Span::styled(" \u{2713}", Style::default().fg(Color::Cyan)));
    }
    header.push(Span::styled(
        format!(" {} \u{b7} {}", user.at_handle(), tweet.time_ago),
        Style::default().fg(Color::DarkGray),
    ));
    if card.is_followed {
        header.push(Span::styled(
            " [Following]",
            Style::default().fg(Color::Green),
        ));
    }

    let mut lines = vec![Line::from(header)];

    let text_width = width.saturating_sub(INDENT.len());
    for text in wrap_text(&tweet.content, text_width) {
        lines.push(Line::from(format!("{}{}", INDENT, text)));
    }

    for image in tweet.images() {
        lines.push(Line::styled(
            format!("{}[img] {}", INDENT, image),
            Style::default().fg(Color::Magenta),
        ));
    }

    lines.push(Line::styled(
        format!(
            "{}\u{21a9} {}   \u{21bb} {}   \u{2665} {}",
            INDENT,
            format_count(tweet.replies),
            format_count(tweet.retweets),
            format_count(tweet.likes)
        ),
        Style::default().fg(Color::Gray),
    ));
    lines.push(Line::from(""));

    lines
}

/// Greedy word wrap; words longer than `width` are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw in text.lines() {
        let mut current = String::new();
        for word in raw.split_whitespace() {
            let current_len = current.chars().count();
            if current_len > 0 && current_len + 1 + word.chars().count() > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);

            while current.chars().count() > width {
                let head: String = current.chars().take(width).collect();
                let tail: String = current.chars().skip(width).collect();
                lines.push(head);
                current = tail;
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Tweet, User};

    fn user() -> User {
        User {
            id: "u1".to_string(),
            username: "Ada".to_string(),
            handle: "ada".to_string(),
            avatar: String::new(),
            verified: true,
        }
    }

    fn tweet(content: &str, images: Option<Vec<String>>) -> Tweet {
        Tweet {
            id: "t1".to_string(),
            user_id: "u1".to_string(),
            content: content.to_string(),
            likes: 1_500,
            retweets: 2_300_000,
            replies: 42,
            time_ago: "3h".to_string(),
            images,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
        assert_eq!(wrap_text("hello world", 7), vec!["hello", "world"]);
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("a\nb", 10), vec!["a", "b"]);
    }

    #[test]
    fn test_card_lines_layout() {
        let user = user();
        let tweet = tweet("short text", Some(vec!["https://img.example/1.png".to_string()]));
        let card = FeedCard {
            tweet: &tweet,
            user: &user,
            is_followed: true,
        };

        let lines = card_lines(&card, 60, false);
        // header, text, image, counts, spacer
        assert_eq!(lines.len(), 5);

        let header = line_text(&lines[0]);
        assert!(header.contains("Ada"));
        assert!(header.contains("\u{2713}"));
        assert!(header.contains("@ada \u{b7} 3h"));
        assert!(header.contains("[Following]"));

        let counts = line_text(&lines[3]);
        assert!(counts.contains("42"));
        assert!(counts.contains("2.3M"));
        assert!(counts.contains("1.5K"));
    }

    #[test]
    fn test_card_heights_follow_wrapping() {
        let user = user();
        let tweet = tweet("one two three four five six", None);
        let card = FeedCard {
            tweet: &tweet,
            user: &user,
            is_followed: false,
        };

        let wide = card_heights(&[card], 80);
        let narrow = card_heights(&[card], 12);
        assert_eq!(wide, vec![4]);
        assert!(narrow[0] > wide[0]);
    }
}

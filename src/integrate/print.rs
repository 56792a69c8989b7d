//! Print mode (--print option)
//!
//! Loads the feed, fetches a number of pages without delay and writes the
//! resulting cards to stdout, so the feed can be used from scripts.

use std::io::{self, Write};
use std::str::FromStr;

use serde_json::json;

use crate::core::{FeedController, FeedTab};
use crate::render::format_count;

/// Exit codes for the application
///
/// These codes are stable and can be relied upon for scripting:
/// - `SUCCESS` (0): Normal exit
/// - `ERROR` (2): Runtime error (I/O error, terminal error, etc.)
/// - `INVALID` (3): Invalid command-line arguments or option values
pub mod exit_code {
    /// Normal exit
    pub const SUCCESS: i32 = 0;
    /// Runtime error occurred
    pub const ERROR: i32 = 2;
    /// Invalid arguments or options (e.g., unknown flag, invalid format)
    pub const INVALID: i32 = 3;
}

/// Output format for printed cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One tab-separated card per line (default)
    #[default]
    Lines,
    /// A single JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lines" | "line" => Ok(Self::Lines),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// What to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    pub tab: FeedTab,
    /// Pages to fetch, at least one
    pub pages: usize,
    pub format: OutputFormat,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            tab: FeedTab::ForYou,
            pages: 1,
            format: OutputFormat::Lines,
        }
    }
}

/// Select the tab, fetch the requested pages and print them to stdout
pub fn print_feed(controller: &mut FeedController, options: PrintOptions) -> io::Result<()> {
    if let Some(ticket) = controller.select_tab(options.tab) {
        controller.complete_fetch(ticket);
    }
    for _ in 1..options.pages.max(1) {
        if controller.fetch_page(options.tab).is_none() {
            break;
        }
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_feed(&mut handle, controller, options.tab, options.format)?;
    handle.flush()
}

/// Write the displayed cards of `tab`
pub fn write_feed<W: Write>(
    out: &mut W,
    controller: &FeedController,
    tab: FeedTab,
    format: OutputFormat,
) -> io::Result<()> {
    let cards = controller.feed_cards(tab);

    match format {
        OutputFormat::Lines => {
            for card in &cards {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    card.tweet.id,
                    card.user.at_handle(),
                    card.tweet.time_ago,
                    single_line(&card.tweet.content),
                    format_count(card.tweet.replies),
                    format_count(card.tweet.retweets),
                    format_count(card.tweet.likes)
                )?;
            }
            if let Some(notice) = controller.end_notice(tab) {
                writeln!(out, "# {}", notice)?;
            }
        }
        OutputFormat::Json => {
            let tweets: Vec<_> = cards
                .iter()
                .map(|card| {
                    json!({
                        "id": card.tweet.id,
                        "user": card.user,
                        "content": card.tweet.content,
                        "likes": card.tweet.likes,
                        "retweets": card.tweet.retweets,
                        "replies": card.tweet.replies,
                        "timeAgo": card.tweet.time_ago,
                        "images": card.tweet.images(),
                        "following": card.is_followed,
                    })
                })
                .collect();
            let state = controller.tab_state(tab);
            let doc = json!({
                "tab": tab.key(),
                "page": state.cursor.saturating_sub(1),
                "hasMore": state.has_more,
                "tweets": tweets,
                "endNotice": controller.end_notice(tab),
            });
            writeln!(out, "{}", doc)?;
        }
    }

    Ok(())
}

/// Collapse newlines and tabs so a card fits on one line
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemorySource;
    use crate::model::{Tweet, User};

    fn controller() -> FeedController {
        let users = vec![User {
            id: "u1".to_string(),
            username: "Ada".to_string(),
            handle: "ada".to_string(),
            avatar: String::new(),
            verified: true,
        }];
        let tweets = vec![Tweet {
            id: "t1".to_string(),
            user_id: "u1".to_string(),
            content: "multi\nline\ttext".to_string(),
            likes: 1_500,
            retweets: 2_300_000,
            replies: 42,
            time_ago: "2h".to_string(),
            images: None,
        }];
        let mut controller = FeedController::default();
        controller.initialize(&MemorySource::new(users, tweets));
        controller.fetch_page(FeedTab::ForYou);
        controller
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("LINES".parse::<OutputFormat>(), Ok(OutputFormat::Lines));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_write_lines() {
        let controller = controller();
        let mut out = Vec::new();
        write_feed(&mut out, &controller, FeedTab::ForYou, OutputFormat::Lines).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "t1\t@ada\t2h\tmulti line text\t42\t2.3M\t1.5K\n# No more recommended tweets\n"
        );
    }

    #[test]
    fn test_write_json() {
        let controller = controller();
        let mut out = Vec::new();
        write_feed(&mut out, &controller, FeedTab::ForYou, OutputFormat::Json).unwrap();

        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc["tab"], "forYou");
        assert_eq!(doc["hasMore"], false);
        assert_eq!(doc["tweets"][0]["user"]["handle"], "ada");
        assert_eq!(doc["tweets"][0]["following"], true);
    }
}

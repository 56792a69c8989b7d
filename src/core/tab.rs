//! Tab state management
//!
//! The feed has exactly two tabs. Each tab keeps its own page cursor and
//! "more data available" flag; the displayed tweets live in the controller.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// One of the two mutually exclusive feed views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FeedTab {
    /// Every tweet, in fixture order
    #[default]
    ForYou,
    /// Only tweets from followed users
    Following,
}

impl FeedTab {
    /// Both tabs in display order
    pub const ALL: [FeedTab; 2] = [FeedTab::ForYou, FeedTab::Following];

    /// Position of the tab in the tab bar (and in per-tab arrays)
    pub fn index(self) -> usize {
        match self {
            FeedTab::ForYou => 0,
            FeedTab::Following => 1,
        }
    }

    /// The other tab
    pub fn toggle(self) -> Self {
        match self {
            FeedTab::ForYou => FeedTab::Following,
            FeedTab::Following => FeedTab::ForYou,
        }
    }

    /// Label shown in the tab bar
    pub fn display_name(&self) -> &'static str {
        match self {
            FeedTab::ForYou => "For You",
            FeedTab::Following => "Following",
        }
    }

    /// Stable key used in machine-readable output
    pub fn key(&self) -> &'static str {
        match self {
            FeedTab::ForYou => "forYou",
            FeedTab::Following => "following",
        }
    }
}

impl fmt::Display for FeedTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FeedTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "foryou" | "for" | "1" => Ok(FeedTab::ForYou),
            "following" | "2" => Ok(FeedTab::Following),
            _ => Err(format!(
                "Invalid tab '{}'. Valid tabs: for-you, following",
                s
            )),
        }
    }
}

/// Pagination state of a single tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    /// Next page to fetch (1-based)
    pub cursor: usize,
    /// False once a fetch reached the end of the filtered sequence
    pub has_more: bool,
    /// Bumped on every reset; fetch tickets from older generations are stale
    pub generation: u64,
}

impl Default for TabState {
    fn default() -> Self {
        Self::new()
    }
}

impl TabState {
    pub fn new() -> Self {
        Self {
            cursor: 1,
            has_more: true,
            generation: 0,
        }
    }

    /// Back to page 1 with more data assumed, invalidating in-flight fetches
    pub fn reset(&mut self) {
        self.cursor = 1;
        self.has_more = true;
        self.generation += 1;
    }
}

/// Per-tab pagination state, indexed by [`FeedTab`]
#[derive(Debug, Clone, Default)]
pub struct TabStates {
    states: [TabState; 2],
}

impl TabStates {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Index<FeedTab> for TabStates {
    type Output = TabState;

    fn index(&self, tab: FeedTab) -> &TabState {
        &self.states[tab.index()]
    }
}

impl IndexMut<FeedTab> for TabStates {
    fn index_mut(&mut self, tab: FeedTab) -> &mut TabState {
        &mut self.states[tab.index()]
    }
}

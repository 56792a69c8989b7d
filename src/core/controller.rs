//! Feed controller - pagination and tab-switch state machine
//!
//! Owns the loaded users and tweets, the followed set, per-tab pagination
//! and the displayed feeds. Fetching is split in two phases so the caller can
//! put a delay (or a worker thread) between them:
//!
//! 1. [`FeedController::begin_fetch`] claims the global `loading` flag and
//!    returns a [`FetchTicket`].
//! 2. [`FeedController::complete_fetch`] applies the page and releases the
//!    flag, whatever happens.
//!
//! Only one fetch may be in flight at a time, regardless of tab. A request
//! made while loading is dropped, not queued.

use std::collections::HashMap;

use tracing::{debug, error, info, warn};

use super::{FeedTab, FollowedSet, TabState, TabStates};
use crate::data::DataSource;
use crate::model::{Tweet, User};

/// Number of tweets per page
pub const PAGE_SIZE: usize = 10;

/// Number of users followed right after loading
pub const DEFAULT_INITIAL_FOLLOW: usize = 10;

/// Claim on the single fetch slot, returned by [`FeedController::begin_fetch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub tab: FeedTab,
    /// Page requested (1-based)
    pub cursor: usize,
    /// Tab generation when the fetch started
    pub generation: u64,
}

/// What [`FeedController::complete_fetch`] did with a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was appended to the tab's feed
    Applied {
        tab: FeedTab,
        count: usize,
        has_more: bool,
    },
    /// The tab was reset after the ticket was issued; nothing changed
    Stale { tab: FeedTab },
}

/// A displayable tweet joined with its author
#[derive(Debug, Clone, Copy)]
pub struct FeedCard<'a> {
    pub tweet: &'a Tweet,
    pub user: &'a User,
    /// Whether the author is in the followed set
    pub is_followed: bool,
}

/// State machine behind both feed tabs
#[derive(Debug)]
pub struct FeedController {
    users: Vec<User>,
    user_index: HashMap<String, usize>,
    tweets: Vec<Tweet>,
    followed: FollowedSet,
    tabs: TabStates,
    /// Displayed tweets per tab, as indices into `tweets`
    feeds: [Vec<usize>; 2],
    active: FeedTab,
    loading: bool,
    initial_follow_count: usize,
    load_errors: Vec<String>,
}

impl Default for FeedController {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_FOLLOW)
    }
}

impl FeedController {
    /// Create an empty controller; call [`initialize`](Self::initialize) next
    pub fn new(initial_follow_count: usize) -> Self {
        Self {
            users: Vec::new(),
            user_index: HashMap::new(),
            tweets: Vec::new(),
            followed: FollowedSet::new(),
            tabs: TabStates::new(),
            feeds: [Vec::new(), Vec::new()],
            active: FeedTab::default(),
            loading: false,
            initial_follow_count,
            load_errors: Vec::new(),
        }
    }

    /// Load users and tweets and seed the followed set.
    ///
    /// Load failures are logged and recorded in [`load_errors`](Self::load_errors);
    /// the affected collection stays empty so the feed renders empty.
    pub fn initialize(&mut self, source: &dyn DataSource) {
        match source.load_users() {
            Ok(users) => {
                self.followed = FollowedSet::seeded(&users, self.initial_follow_count);
                self.user_index = users
                    .iter()
                    .enumerate()
                    .map(|(i, u)| (u.id.clone(), i))
                    .collect();
                self.users = users;
            }
            Err(e) => {
                error!(error = %e, "failed to load users");
                self.load_errors.push(format!("users: {}", e));
            }
        }

        match source.load_tweets() {
            Ok(tweets) => self.tweets = tweets,
            Err(e) => {
                error!(error = %e, "failed to load tweets");
                self.load_errors.push(format!("tweets: {}", e));
            }
        }

        info!(
            users = self.users.len(),
            tweets = self.tweets.len(),
            followed = self.followed.len(),
            "feed data loaded"
        );
    }

    /// Make `tab` active and restart its pagination.
    ///
    /// Only the selected tab's cursor is reset, but the displayed feeds of
    /// both tabs are cleared. Returns the ticket of the implicit first-page
    /// fetch when one could be started right away.
    pub fn select_tab(&mut self, tab: FeedTab) -> Option<FetchTicket> {
        self.active = tab;
        self.tabs[tab].reset();
        for feed in &mut self.feeds {
            feed.clear();
        }
        debug!(%tab, generation = self.tabs[tab].generation, "tab selected");
        self.ensure_active_loaded()
    }

    /// Start the first page of the active tab if it is still empty.
    ///
    /// Covers the implicit fetch after startup and after a tab switch that
    /// happened while another fetch was in flight.
    pub fn ensure_active_loaded(&mut self) -> Option<FetchTicket> {
        if self.wants_initial_page() {
            self.begin_fetch(self.active)
        } else {
            None
        }
    }

    /// True when the active tab is empty and a first page can be fetched
    pub fn wants_initial_page(&self) -> bool {
        self.has_data()
            && !self.loading
            && self.feeds[self.active.index()].is_empty()
            && self.tabs[self.active].has_more
    }

    /// Claim the fetch slot for the next page of `tab`.
    ///
    /// Returns `None` without touching any state when a fetch is already in
    /// flight or the tab is exhausted.
    pub fn begin_fetch(&mut self, tab: FeedTab) -> Option<FetchTicket> {
        if self.loading {
            debug!(%tab, "fetch dropped: another fetch in flight");
            return None;
        }
        let state = self.tabs[tab];
        if !state.has_more {
            return None;
        }

        self.loading = true;
        debug!(%tab, page = state.cursor, "fetch started");
        Some(FetchTicket {
            tab,
            cursor: state.cursor,
            generation: state.generation,
        })
    }

    /// Apply the page described by `ticket` and release the fetch slot.
    ///
    /// The `following` filter reads the followed set as it is now, not as it
    /// was when the ticket was issued.
    pub fn complete_fetch(&mut self, ticket: FetchTicket) -> FetchOutcome {
        self.loading = false;

        let tab = ticket.tab;
        if self.tabs[tab].generation != ticket.generation {
            warn!(%tab, page = ticket.cursor, "discarding stale page");
            return FetchOutcome::Stale { tab };
        }

        let filtered = self.filtered_indices(tab);
        let start = ticket.cursor.saturating_sub(1) * PAGE_SIZE;
        let end = start + PAGE_SIZE;
        let page: Vec<usize> = filtered.iter().skip(start).take(PAGE_SIZE).copied().collect();
        let count = page.len();
        let has_more = filtered.len() > end;

        self.feeds[tab.index()].extend(page);
        let state = &mut self.tabs[tab];
        state.cursor = ticket.cursor + 1;
        state.has_more = has_more;

        debug!(%tab, page = ticket.cursor, count, has_more, "fetch applied");
        FetchOutcome::Applied {
            tab,
            count,
            has_more,
        }
    }

    /// Fetch the next page of `tab` without any delay
    pub fn fetch_page(&mut self, tab: FeedTab) -> Option<FetchOutcome> {
        self.begin_fetch(tab)
            .map(|ticket| self.complete_fetch(ticket))
    }

    /// The last rendered tweet of `tab` is nearly visible
    pub fn notify_near_end(&mut self, tab: FeedTab) -> Option<FetchTicket> {
        self.begin_fetch(tab)
    }

    /// Follow a user; affects the next `following` page
    pub fn follow(&mut self, user_id: &str) -> bool {
        let changed = self.followed.follow(user_id);
        debug!(user_id, changed, "follow");
        changed
    }

    /// Unfollow a user; affects the next `following` page
    pub fn unfollow(&mut self, user_id: &str) -> bool {
        let changed = self.followed.unfollow(user_id);
        debug!(user_id, changed, "unfollow");
        changed
    }

    /// Flip the follow state of a user; returns whether it is now followed
    pub fn toggle_follow(&mut self, user_id: &str) -> bool {
        let now_followed = self.followed.toggle(user_id);
        debug!(user_id, now_followed, "toggle follow");
        now_followed
    }

    /// Displayed tweets of `tab` joined with their authors.
    ///
    /// Tweets whose author is unknown are skipped.
    pub fn feed_cards(&self, tab: FeedTab) -> Vec<FeedCard<'_>> {
        self.feeds[tab.index()]
            .iter()
            .filter_map(|&i| {
                let tweet = &self.tweets[i];
                let user = self.user(&tweet.user_id)?;
                Some(FeedCard {
                    tweet,
                    user,
                    is_followed: self.followed.contains(&user.id),
                })
            })
            .collect()
    }

    /// Displayed tweets of `tab`, including ones with a dangling author
    pub fn feed(&self, tab: FeedTab) -> Vec<&Tweet> {
        self.feeds[tab.index()]
            .iter()
            .map(|&i| &self.tweets[i])
            .collect()
    }

    /// Message shown under an exhausted feed
    pub fn end_notice(&self, tab: FeedTab) -> Option<&'static str> {
        if self.tabs[tab].has_more {
            return None;
        }
        Some(match tab {
            FeedTab::ForYou => "No more recommended tweets",
            FeedTab::Following if self.feeds[tab.index()].is_empty() => {
                "You don't follow anyone yet"
            }
            FeedTab::Following => "You've seen every tweet from accounts you follow",
        })
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.user_index.get(id).map(|&i| &self.users[i])
    }

    /// True once at least one tweet has been loaded
    pub fn has_data(&self) -> bool {
        !self.tweets.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn active_tab(&self) -> FeedTab {
        self.active
    }

    pub fn tab_state(&self, tab: FeedTab) -> &TabState {
        &self.tabs[tab]
    }

    pub fn followed(&self) -> &FollowedSet {
        &self.followed
    }

    pub fn tweets(&self) -> &[Tweet] {
        &self.tweets
    }

    /// Diagnostics recorded by [`initialize`](Self::initialize)
    pub fn load_errors(&self) -> &[String] {
        &self.load_errors
    }

    fn filtered_indices(&self, tab: FeedTab) -> Vec<usize> {
        self.tweets
            .iter()
            .enumerate()
            .filter(|(_, t)| match tab {
                FeedTab::ForYou => true,
                FeedTab::Following => self.followed.contains(&t.user_id),
            })
            .map(|(i, _)| i)
            .collect()
    }
}

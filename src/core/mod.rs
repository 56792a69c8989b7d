//! Core module - Feed state machine, tabs and UI state

pub mod controller;
pub mod follow;
pub mod mode;
pub mod state;
pub mod tab;

pub use controller::{
    FeedCard, FeedController, FetchOutcome, FetchTicket, DEFAULT_INITIAL_FOLLOW, PAGE_SIZE,
};
pub use follow::FollowedSet;
pub use mode::ViewMode;
pub use state::{AppState, DEFAULT_PREFETCH_MARGIN};
pub use tab::{FeedTab, TabState, TabStates};

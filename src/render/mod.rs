//! Render module - UI rendering

pub mod feed;
pub mod format;
pub mod status;
pub mod tabs;

pub use feed::{card_heights, card_lines, feed_inner, render_feed, wrap_text};
pub use format::format_count;
pub use status::{feed_stats, render_help_popup, render_status_bar};
pub use tabs::{render_tab_bar, tab_at_column};

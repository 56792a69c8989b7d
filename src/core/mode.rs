//! View mode definitions

/// Current view mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Reading the feed
    #[default]
    Browse,
    /// Help popup over the feed
    Help,
}

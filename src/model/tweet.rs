//! Tweet record

use serde::{Deserialize, Serialize};

use super::UserId;

/// Identifier of a tweet
pub type TweetId = String;

/// A single tweet, immutable after load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    pub id: TweetId,
    /// Owning user (may dangle; such tweets are skipped when rendered)
    pub user_id: UserId,
    pub content: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub retweets: u64,
    #[serde(default)]
    pub replies: u64,
    /// Relative time label, e.g. "2h"
    #[serde(default)]
    pub time_ago: String,
    /// Attached image references
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl Tweet {
    /// Image references, empty when the tweet has none
    pub fn images(&self) -> &[String] {
        self.images.as_deref().unwrap_or(&[])
    }
}

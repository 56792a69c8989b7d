//! User record

use serde::{Deserialize, Serialize};

/// Identifier of a user (foreign key target for tweets)
pub type UserId = String;

/// A user account, immutable after load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Display name
    pub username: String,
    /// Handle without the leading `@`
    pub handle: String,
    /// Avatar reference (URL or path)
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub verified: bool,
}

impl User {
    /// Handle as shown on a card (`@handle`)
    pub fn at_handle(&self) -> String {
        format!("@{}", self.handle)
    }
}

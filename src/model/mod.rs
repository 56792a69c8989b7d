//! Model module - Users and tweets as loaded from the fixtures

pub mod tweet;
pub mod user;

pub use tweet::{Tweet, TweetId};
pub use user::{User, UserId};

//! Fixture sources

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::error::{FeedError, Result};
use crate::model::{Tweet, User};

/// File name of the user fixture inside the data directory
pub const USERS_FILE: &str = "users.json";
/// File name of the tweet fixture inside the data directory
pub const TWEETS_FILE: &str = "tweets.json";

/// Provider of the two startup collections
pub trait DataSource {
    /// Load every user, in fixture order
    fn load_users(&self) -> Result<Vec<User>>;
    /// Load every tweet, in fixture order
    fn load_tweets(&self) -> Result<Vec<Tweet>>;
}

/// Reads `users.json` and `tweets.json` from a directory
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read_array<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.dir.join(file);
        if !path.is_file() {
            return Err(FeedError::path(path, "fixture not found"));
        }
        let content = fs::read_to_string(&path)?;
        let items = serde_json::from_str(&content)?;
        Ok(items)
    }
}

impl DataSource for DirSource {
    fn load_users(&self) -> Result<Vec<User>> {
        self.read_array(USERS_FILE)
    }

    fn load_tweets(&self) -> Result<Vec<Tweet>> {
        self.read_array(TWEETS_FILE)
    }
}

/// In-memory source, with optional injected failures
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    users: Vec<User>,
    tweets: Vec<Tweet>,
    users_error: Option<String>,
    tweets_error: Option<String>,
}

impl MemorySource {
    pub fn new(users: Vec<User>, tweets: Vec<Tweet>) -> Self {
        Self {
            users,
            tweets,
            users_error: None,
            tweets_error: None,
        }
    }

    /// Make `load_users` fail with the given reason
    pub fn failing_users(mut self, reason: impl Into<String>) -> Self {
        self.users_error = Some(reason.into());
        self
    }

    /// Make `load_tweets` fail with the given reason
    pub fn failing_tweets(mut self, reason: impl Into<String>) -> Self {
        self.tweets_error = Some(reason.into());
        self
    }
}

impl DataSource for MemorySource {
    fn load_users(&self) -> Result<Vec<User>> {
        match &self.users_error {
            Some(reason) => Err(FeedError::load("users", reason.clone())),
            None => Ok(self.users.clone()),
        }
    }

    fn load_tweets(&self) -> Result<Vec<Tweet>> {
        match &self.tweets_error {
            Some(reason) => Err(FeedError::load("tweets", reason.clone())),
            None => Ok(self.tweets.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_fixtures(dir: &Path) {
        fs::write(
            dir.join(USERS_FILE),
            r#"[{"id":"u1","username":"Ada","handle":"ada","avatar":"a.png","verified":true}]"#,
        )
        .unwrap();
        fs::write(
            dir.join(TWEETS_FILE),
            r#"[{"id":"t1","userId":"u1","content":"hi","likes":1,"retweets":2,"replies":3,"timeAgo":"1h"}]"#,
        )
        .unwrap();
    }

    #[test]
    fn test_dir_source_loads_both_fixtures() {
        let temp = TempDir::new().unwrap();
        write_fixtures(temp.path());

        let source = DirSource::new(temp.path());
        let users = source.load_users().unwrap();
        let tweets = source.load_tweets().unwrap();

        assert_eq!(users.len(), 1);
        assert!(users[0].verified);
        assert_eq!(tweets[0].user_id, "u1");
    }

    #[test]
    fn test_dir_source_missing_file() {
        let temp = TempDir::new().unwrap();
        let source = DirSource::new(temp.path());

        let err = source.load_users().unwrap_err();
        assert!(matches!(err, FeedError::Path { .. }));
    }

    #[test]
    fn test_dir_source_malformed_json() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(TWEETS_FILE), "{not json").unwrap();

        let err = DirSource::new(temp.path()).load_tweets().unwrap_err();
        assert!(matches!(err, FeedError::Json(_)));
    }

    #[test]
    fn test_memory_source_failures() {
        let source = MemorySource::default().failing_tweets("timeout");
        assert!(source.load_users().unwrap().is_empty());
        assert!(matches!(
            source.load_tweets(),
            Err(FeedError::Load { .. })
        ));
    }
}

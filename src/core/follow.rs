//! Followed-user set

use std::collections::HashSet;

use crate::model::{User, UserId};

/// Users the viewer follows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowedSet {
    ids: HashSet<UserId>,
}

impl FollowedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow the first `count` users in load order
    pub fn seeded(users: &[User], count: usize) -> Self {
        Self {
            ids: users.iter().take(count).map(|u| u.id.clone()).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Returns true if the user was not followed before
    pub fn follow(&mut self, id: impl Into<UserId>) -> bool {
        self.ids.insert(id.into())
    }

    /// Returns true if the user was followed before
    pub fn unfollow(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Flip the follow state; returns whether the user is now followed
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserId> {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(n: usize) -> Vec<User> {
        (0..n)
            .map(|i| User {
                id: format!("u{}", i),
                username: format!("User {}", i),
                handle: format!("user{}", i),
                avatar: String::new(),
                verified: false,
            })
            .collect()
    }

    #[test]
    fn test_seeded_takes_first_users() {
        let set = FollowedSet::seeded(&users(25), 10);
        assert_eq!(set.len(), 10);
        assert!(set.contains("u0"));
        assert!(set.contains("u9"));
        assert!(!set.contains("u10"));
    }

    #[test]
    fn test_seeded_with_fewer_users() {
        let set = FollowedSet::seeded(&users(3), 10);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_follow_unfollow_toggle() {
        let mut set = FollowedSet::new();
        assert!(set.follow("u1"));
        assert!(!set.follow("u1"));
        assert!(set.unfollow("u1"));
        assert!(!set.unfollow("u1"));

        assert!(set.toggle("u2"));
        assert!(set.contains("u2"));
        assert!(!set.toggle("u2"));
        assert!(set.is_empty());
    }
}

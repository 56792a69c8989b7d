//! Data module - Startup loading of the user and tweet fixtures
//!
//! Both resources are read whole, once, at launch. The controller only sees
//! the [`DataSource`] trait so tests can feed it from memory.

mod source;

pub use source::{DataSource, DirSource, MemorySource, TWEETS_FILE, USERS_FILE};

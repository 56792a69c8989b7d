//! FeedView - A social feed reader with infinite scroll for terminal emulators
//!
//! This crate provides a two-tab timeline ("For You" and "Following") over
//! fixture data, paged ten tweets at a time with a simulated network delay.

pub mod app;
pub mod core;
pub mod data;
pub mod error;
pub mod handler;
pub mod integrate;
pub mod logging;
pub mod model;
pub mod render;

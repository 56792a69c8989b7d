//! Application module
//!
//! This module contains the main application logic, configuration,
//! the page fetch worker and the event loop for FeedView.

mod config;
mod config_file;
mod event_loop;
mod fetcher;
mod render;

pub use config::Config;
pub use config_file::ConfigFile;
pub use event_loop::{run_app, AppResult};
pub use fetcher::{PageFetcher, DEFAULT_FETCH_DELAY};
pub use render::{frame_layout, render_frame, FrameLayout, RenderContext};

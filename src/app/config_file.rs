//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/feedview/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::fetcher::DEFAULT_FETCH_DELAY;
use crate::core::{DEFAULT_INITIAL_FOLLOW, DEFAULT_PREFETCH_MARGIN};
use crate::error::{FeedError, Result};

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// Feed paging settings
    pub feed: FeedConfig,
    /// Log output settings
    pub log: LogConfig,
}

/// General application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory holding users.json and tweets.json
    pub data_dir: Option<PathBuf>,
    /// Tab shown at startup: "for-you" or "following"
    pub initial_tab: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            initial_tab: "for-you".to_string(),
            mouse_enabled: true,
        }
    }
}

/// Feed paging settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Simulated latency of each page fetch
    pub fetch_delay_ms: u64,
    /// Number of users followed at startup, in load order
    pub initial_follow_count: usize,
    /// Cards left below the viewport before the next page is requested
    pub prefetch_margin: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: DEFAULT_FETCH_DELAY.as_millis() as u64,
            initial_follow_count: DEFAULT_INITIAL_FOLLOW,
            prefetch_margin: DEFAULT_PREFETCH_MARGIN,
        }
    }
}

/// Log output settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when FEEDVIEW_LOG is unset
    pub level: String,
    /// Log file path (defaults to ~/.cache/feedview/feedview.log)
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/feedview)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("feedview"))
    }

    /// Get the config file path (~/.config/feedview/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        Self::config_path()
            .filter(|path| path.exists())
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| FeedError::config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.general.data_dir.is_none());
        assert_eq!(config.general.initial_tab, "for-you");
        assert!(config.general.mouse_enabled);
        assert_eq!(config.feed.fetch_delay_ms, 800);
        assert_eq!(config.feed.initial_follow_count, 10);
        assert_eq!(config.feed.prefetch_margin, 2);
        assert_eq!(config.log.level, "info");
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[feed]
fetch_delay_ms = 0
"#;
        let config: ConfigFile = toml::from_str(toml_content).unwrap();
        assert_eq!(config.feed.fetch_delay_ms, 0);
        assert_eq!(config.feed.initial_follow_count, 10); // default
        assert!(config.general.mouse_enabled); // default
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[general]
data_dir = "/srv/feed"
initial_tab = "following"
mouse_enabled = false

[feed]
fetch_delay_ms = 250
initial_follow_count = 3
prefetch_margin = 5

[log]
level = "feedview=debug"
file = "/tmp/feedview.log"
"#;
        let config: ConfigFile = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.data_dir, Some(PathBuf::from("/srv/feed")));
        assert_eq!(config.general.initial_tab, "following");
        assert!(!config.general.mouse_enabled);
        assert_eq!(config.feed.fetch_delay_ms, 250);
        assert_eq!(config.feed.initial_follow_count, 3);
        assert_eq!(config.feed.prefetch_margin, 5);
        assert_eq!(config.log.level, "feedview=debug");
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/feedview.log")));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[feed]
initial_follow_count = 0
"#
        )
        .unwrap();

        let config = ConfigFile::load_from(file.path()).unwrap();
        assert_eq!(config.feed.initial_follow_count, 0);
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "invalid toml {{{{").unwrap();

        let result = ConfigFile::load_from(file.path());
        assert!(matches!(result, Err(FeedError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = ConfigFile::load_from(&dir.path().join("config.toml"));
        assert!(matches!(result, Err(FeedError::Io(_))));
    }
}

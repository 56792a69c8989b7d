//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::config_file::ConfigFile;
use crate::core::FeedTab;
use crate::integrate::{exit_code, OutputFormat};

/// Application configuration from CLI args and config file
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding users.json and tweets.json
    pub data_dir: PathBuf,
    pub initial_tab: FeedTab,
    /// Simulated latency of each page fetch
    pub fetch_delay: Duration,
    pub initial_follow_count: usize,
    /// Cards left below the viewport before the next page is requested
    pub prefetch_margin: usize,
    /// Enable mouse support (config file, `--no-mouse` overrides)
    pub mouse_enabled: bool,
    /// Print mode (non-interactive, output to stdout)
    pub print_mode: bool,
    /// Pages fetched in print mode
    pub print_pages: usize,
    pub output_format: OutputFormat,
    /// Filter directive used when FEEDVIEW_LOG is unset
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    /// Config file problems found before logging is up; main reports them
    pub warnings: Vec<String>,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        // Load config file first (provides defaults)
        let config_file = ConfigFile::load();
        Self::parse(env::args().skip(1), config_file)
    }

    /// Merge command-line arguments over a loaded config file
    ///
    /// CLI arguments take precedence over config file
    pub fn parse<I>(args: I, config_file: ConfigFile) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut data_dir: Option<PathBuf> = None;
        let mut initial_tab: Option<FeedTab> = None;
        let mut fetch_delay_ms: Option<u64> = None;
        let mut follow_count: Option<usize> = None;
        let mut no_mouse = false;
        let mut print_mode = false;
        let mut print_pages: usize = 1;
        let mut output_format = OutputFormat::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tab" | "-t" => {
                    let Some(value) = args.next() else {
                        anyhow::bail!("--tab requires a value (for-you or following)");
                    };
                    initial_tab = Some(FeedTab::from_str(&value).map_err(anyhow::Error::msg)?);
                }
                "--delay" | "-d" => {
                    let Some(value) = args.next() else {
                        anyhow::bail!("--delay requires a value in milliseconds");
                    };
                    fetch_delay_ms = Some(value.parse().map_err(|_| {
                        anyhow::anyhow!("--delay requires a non-negative integer, got '{}'", value)
                    })?);
                }
                "--follow" => {
                    let Some(value) = args.next() else {
                        anyhow::bail!("--follow requires a count");
                    };
                    follow_count = Some(value.parse().map_err(|_| {
                        anyhow::anyhow!("--follow requires a non-negative integer, got '{}'", value)
                    })?);
                }
                "--print" | "-p" => print_mode = true,
                "--pages" => {
                    let Some(value) = args.next() else {
                        anyhow::bail!("--pages requires a value");
                    };
                    print_pages = match value.parse::<usize>() {
                        Ok(n) if n > 0 => n,
                        _ => anyhow::bail!("--pages requires a positive integer, got '{}'", value),
                    };
                }
                "--format" | "-f" => {
                    let Some(fmt) = args.next() else {
                        anyhow::bail!("--format requires a value (lines or json)");
                    };
                    output_format = OutputFormat::from_str(&fmt).map_err(|_| {
                        anyhow::anyhow!("Invalid format '{}'. Valid formats: lines, json", fmt)
                    })?;
                }
                "--no-mouse" => no_mouse = true,
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(exit_code::SUCCESS);
                }
                "--version" | "-V" => {
                    println!("feedview {}", env!("CARGO_PKG_VERSION"));
                    std::process::exit(exit_code::SUCCESS);
                }
                path if !path.starts_with('-') => {
                    let p = PathBuf::from(path);
                    if !p.is_dir() {
                        anyhow::bail!("Data directory does not exist: {}", path);
                    }
                    data_dir = Some(p.canonicalize()?);
                }
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        let data_dir = match data_dir.or(config_file.general.data_dir) {
            Some(dir) => dir,
            None => env::current_dir()?,
        };

        let mut warnings = Vec::new();
        let initial_tab = match initial_tab {
            Some(tab) => tab,
            None => FeedTab::from_str(&config_file.general.initial_tab).unwrap_or_else(|e| {
                warnings.push(format!("config file: {}", e));
                FeedTab::default()
            }),
        };

        Ok(Self {
            data_dir,
            initial_tab,
            fetch_delay: Duration::from_millis(
                fetch_delay_ms.unwrap_or(config_file.feed.fetch_delay_ms),
            ),
            initial_follow_count: follow_count.unwrap_or(config_file.feed.initial_follow_count),
            prefetch_margin: config_file.feed.prefetch_margin,
            mouse_enabled: config_file.general.mouse_enabled && !no_mouse,
            print_mode,
            print_pages,
            output_format,
            log_level: config_file.log.level,
            log_file: config_file.log.file,
            warnings,
        })
    }
}

fn print_help() {
    println!(
        r#"feedview - A social feed reader with infinite scroll

USAGE:
    feedview [OPTIONS] [DATA_DIR]

    DATA_DIR must contain users.json and tweets.json
    (default: [general] data_dir, then the current directory)

OPTIONS:
    -t, --tab TAB       Initial tab: for-you (default), following
    -d, --delay MS      Simulated fetch delay in milliseconds (default 800)
    --follow N          Number of users followed at startup (default 10)
    -p, --print         Print mode: load pages and write them to stdout
    --pages N           Pages to fetch in print mode (default 1)
    -f, --format FMT    Output format for print mode: lines, json
    --no-mouse          Disable mouse support
    -h, --help          Show this help message
    -V, --version       Show version

CONFIG FILE:
    ~/.config/feedview/config.toml    Main configuration file

ENVIRONMENT:
    FEEDVIEW_LOG        Log filter directive (e.g. debug, feedview=trace)

KEYBINDINGS:
    j/↓         Next tweet
    k/↑         Previous tweet
    g/Home      Go to top
    G/End       Go to bottom
    Space/PgDn  Page down
    b/PgUp      Page up
    1           For You tab
    2           Following tab
    Tab         Switch tab
    f           Follow / unfollow the author
    y           Copy tweet to system clipboard
    n           Compose (not available)
    q/Esc       Quit
    ?           Show help

EXIT CODES:
    0           Success
    2           Error (runtime error)
    3           Invalid arguments (unknown option or invalid value)
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> anyhow::Result<Config> {
        Config::parse(args.iter().map(|s| s.to_string()), ConfigFile::default())
    }

    #[test]
    fn test_defaults_from_config_file() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.initial_tab, FeedTab::ForYou);
        assert_eq!(config.fetch_delay, Duration::from_millis(800));
        assert_eq!(config.initial_follow_count, 10);
        assert_eq!(config.prefetch_margin, 2);
        assert!(config.mouse_enabled);
        assert!(!config.print_mode);
        assert_eq!(config.print_pages, 1);
        assert_eq!(config.output_format, OutputFormat::Lines);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_cli_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_str().unwrap();
        let config = parse(&[
            "--tab", "following", "--delay", "0", "--follow", "3", "--print", "--pages", "2",
            "--format", "json", "--no-mouse", path,
        ])
        .unwrap();

        assert_eq!(config.data_dir, dir.path().canonicalize().unwrap());
        assert_eq!(config.initial_tab, FeedTab::Following);
        assert_eq!(config.fetch_delay, Duration::ZERO);
        assert_eq!(config.initial_follow_count, 3);
        assert!(config.print_mode);
        assert_eq!(config.print_pages, 2);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(!config.mouse_enabled);
    }

    #[test]
    fn test_config_file_values_used() {
        let file: ConfigFile = toml::from_str(
            r#"
[general]
initial_tab = "following"
mouse_enabled = false

[feed]
fetch_delay_ms = 100
prefetch_margin = 4
"#,
        )
        .unwrap();
        let config = Config::parse(Vec::<String>::new(), file).unwrap();
        assert_eq!(config.initial_tab, FeedTab::Following);
        assert_eq!(config.fetch_delay, Duration::from_millis(100));
        assert_eq!(config.prefetch_margin, 4);
        assert!(!config.mouse_enabled);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_bad_config_tab_falls_back_with_warning() {
        let file: ConfigFile = toml::from_str("[general]\ninitial_tab = \"trending\"\n").unwrap();
        let config = Config::parse(Vec::<String>::new(), file).unwrap();
        assert_eq!(config.initial_tab, FeedTab::ForYou);
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains("trending"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(parse(&["--tab", "trending"]).is_err());
        assert!(parse(&["--delay", "soon"]).is_err());
        assert!(parse(&["--pages", "0"]).is_err());
        assert!(parse(&["--format", "xml"]).is_err());
        assert!(parse(&["--follow"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["/definitely/not/a/dir"]).is_err());
    }
}

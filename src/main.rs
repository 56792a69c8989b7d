//! FeedView - A social feed reader with infinite scroll for terminal emulators

use std::io::stdout;
use std::process::ExitCode;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::{error, info, warn};

use feedview::app::{run_app, Config};
use feedview::core::FeedController;
use feedview::data::DirSource;
use feedview::integrate::{exit_code, print_feed, PrintOptions};
use feedview::logging;

fn main() -> ExitCode {
    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    // Logging is optional: a read-only cache dir must not stop the app
    let _log_guard = match logging::init(&config.log_level, config.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };
    for w in &config.warnings {
        warn!("{}", w);
        eprintln!("Warning: {}", w);
    }
    info!(data_dir = %config.data_dir.display(), tab = %config.initial_tab, "starting");

    // Handle non-interactive mode first
    if config.print_mode {
        return run_print_mode(&config);
    }

    match run_with_config(config) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            error!(error = %e, "terminal session failed");
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

/// Run in print mode (non-interactive)
fn run_print_mode(config: &Config) -> ExitCode {
    let mut controller = FeedController::new(config.initial_follow_count);
    controller.initialize(&DirSource::new(&config.data_dir));
    for e in controller.load_errors() {
        eprintln!("Warning: {}", e);
    }

    let options = PrintOptions {
        tab: config.initial_tab,
        pages: config.print_pages,
        format: config.output_format,
    };
    match print_feed(&mut controller, options) {
        Ok(_) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

fn run_with_config(config: Config) -> anyhow::Result<i32> {
    let mouse_enabled = config.mouse_enabled;

    // Initialize terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, config);

    // Restore terminal
    terminal::disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;

    result.map(|app_result| app_result.exit_code)
}

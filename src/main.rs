//! MediCitas - a terminal mockup of a medical appointment app.
//!
//! Patients log in, search doctors, book and cancel appointments, read their
//! medical history and adjust reminder settings. All data is sample data held
//! in memory for the session.

mod app;
mod cli;
mod config;
mod data;
mod error;
mod events;
mod logging;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use app::App;
use cli::Cli;
use config::Config;
use error::AppError;
use events::EventHandler;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_guard = logging::init(&cli.log_options())?;
    info!(log_dir = %log_guard.log_dir().display(), "Logging to file");

    let config_path = cli.config_path();

    if cli.init_config {
        let path = config_path?;
        Config::default().save_to(&path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    // A broken config file should not keep the app from starting
    let (config, config_error) = match config_path.and_then(|path| Config::load_from(&path)) {
        Ok(config) => (config, None),
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            (Config::default(), Some(AppError::from(e)))
        }
    };

    let mut settings = config.settings;
    cli.apply_overrides(&mut settings);
    ui::init_theme(ui::load_theme(&settings.theme));

    let events = EventHandler::with_tick_rate(settings.tick_rate_ms);
    let mut app = App::new(settings);
    if let Some(error) = config_error {
        app.handle_error(&error);
    }

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app, &events);
    tui::restore()?;

    logging::shutdown();
    result
}

/// Draw, wait for an event, update. Repeat until the app asks to quit.
fn run(terminal: &mut tui::Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    info!(
        screen = %app.screen(),
        tick_rate = ?events.tick_rate(),
        "Entering event loop"
    );
    while !app.should_quit() {
        terminal.draw(|frame| app.view(frame))?;
        let event = events.next()?;
        app.update(event);
    }
    Ok(())
}

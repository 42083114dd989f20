//! routes-tui - Browse airline routes in the terminal
//!
//! Entry point: parses the command line, sets up file logging, loads the
//! dataset and runs the event loop.

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::model::Dataset;
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use log::LevelFilter;
use std::fs::{File, OpenOptions};

#[derive(Parser, Debug)]
#[clap(name = "routes-tui", version, about = "Browse airline routes in the terminal")]
struct Cli {
    #[clap(
        long,
        help = "JSON file or directory of CSV files to load instead of the bundled routes"
    )]
    data: Option<String>,

    #[clap(long, help = "Rows per page (default 25)")]
    per_page: Option<usize>,

    #[clap(long, help = "File to write logs to (default routes-tui.log)")]
    log_file: Option<String>,

    #[clap(
        long,
        short,
        default_value = "info",
        help = "off, error, warn, info, debug or trace"
    )]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()
        .unwrap_or_default()
        .merge_cli(cli.data, cli.per_page, cli.log_file);

    // The terminal belongs to the UI, so logs go to a file
    init_logging(&config.log_file, cli.log_level);
    log::info!("starting routes-tui with {:?}", config);

    let (dataset, source) = load_dataset(&config)?;
    log::info!(
        "loaded {} routes, {} airlines, {} airports from {}",
        dataset.routes.len(),
        dataset.airlines.len(),
        dataset.airports.len(),
        source
    );
    for problem in services::validate(&dataset) {
        log::warn!("{}", problem);
    }

    let mut tui = Tui::new()?;
    tui.enter()?;

    let mut app = App::new(dataset, source, config.per_page);
    let result = run_app(&mut tui, &mut app);

    tui.exit()?;

    if let Err(err) = result {
        log::error!("{:?}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    log::info!("exiting");
    Ok(())
}

/// Send logs to `path`; without a writable log file the app runs unlogged
fn init_logging(path: &str, level: LevelFilter) {
    match open_log_file(path) {
        Ok(log_file) => {
            env_logger::Builder::new()
                .filter_level(level)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .init();
        }
        Err(err) => {
            eprintln!("Warning: {:#}; continuing without logging", err);
        }
    }
}

fn open_log_file(path: &str) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path))
}

fn load_dataset(config: &Config) -> Result<(Dataset, String)> {
    match &config.data_path {
        Some(path) => {
            let dataset = services::load(path)
                .with_context(|| format!("Failed to load routes from {}", path))?;
            Ok((dataset, path.clone()))
        }
        None => Ok((services::bundled()?, "bundled".to_string())),
    }
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                log::error!("draw error: {}", e);
            }
        })?;

        let Some(event) = tui.next_event()? else {
            continue;
        };

        let action = match event {
            Event::Key(key) => app.handle_key_event(key)?,
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            _ => None,
        };

        // An action might produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            log::trace!("action: {}", a);
            current_action = app.update(a)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level_is_validated() {
        let cli = Cli::try_parse_from(["routes-tui"]).unwrap();
        assert_eq!(cli.log_level, LevelFilter::Info);

        let cli = Cli::try_parse_from(["routes-tui", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, LevelFilter::Debug);

        assert!(Cli::try_parse_from(["routes-tui", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_unwritable_log_file_is_reported() {
        let path = std::env::temp_dir()
            .join("routes-tui-missing-dir")
            .join("nested")
            .join("routes-tui.log");
        let path = path.to_string_lossy();

        let err = open_log_file(&path).unwrap_err();
        assert!(err.to_string().contains("routes-tui.log"));

        // Falls back to running without a logger instead of failing
        init_logging(&path, LevelFilter::Info);
    }

    #[test]
    fn test_log_file_is_created() {
        let dir = std::env::temp_dir().join(format!("routes-tui-log-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("routes-tui.log");

        open_log_file(&path.to_string_lossy()).unwrap();
        assert!(path.exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

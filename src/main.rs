mod catalog;
mod config;
mod error;
mod table;
mod types;
mod ui;

use std::path::PathBuf;
use std::process::exit;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use config::{init_logging, Cli};
use error::Result;
use types::App;
use ui::terminal::Tui;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        exit(1);
    }
}

/// Set up the file logger. A log file that can't be opened only costs the log.
fn start_logging(cli: &Cli) -> Option<PathBuf> {
    match init_logging(cli) {
        Ok(path) => Some(path),
        Err(e) => {
            eprintln!("⚠️  Warning: logging disabled: {}", e);
            None
        }
    }
}

/// Visible rows for the current filter as pretty-printed JSON.
fn rows_json(app: &App) -> Result<String> {
    Ok(serde_json::to_string_pretty(&app.rows())?)
}

fn run(cli: Cli) -> Result<()> {
    let log_path = start_logging(&cli);
    log::info!(
        "Starting shelfscan (json: {}, filter: {:?}, in stock only: {})",
        cli.json,
        cli.filter,
        cli.in_stock_only
    );

    let products = match &cli.products {
        Some(path) => catalog::load_products(path)?,
        None => {
            log::info!("Using built-in catalogue");
            catalog::builtin_products()
        }
    };
    if !catalog::is_grouped(&products) {
        log::warn!("Products are not grouped by category; some categories will get more than one header");
    }

    let app = App::with_filter(products, cli.initial_filter());
    log::debug!("{} products, {} rows visible at start", app.products().len(), app.rows().len());

    if cli.json {
        log::info!("Printing {} rows as JSON", app.rows().len());
        println!("{}", rows_json(&app)?);
        return Ok(());
    }

    let mut terminal = ui::setup_terminal()?;
    let result = event_loop(app, &mut terminal);
    ui::restore_terminal(&mut terminal)?;
    if let Some(path) = log_path {
        log::info!("Exiting, log written to {}", path.display());
    }
    result
}

/// Draw, wait for a key, update state, repeat. Every handled key is followed by
/// a full redraw before the next one is read.
fn event_loop(mut app: App, terminal: &mut Tui) -> Result<()> {
    let tick_rate = Duration::from_millis(250);

    loop {
        ui::render_ui(&app, terminal)?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && ui::input::handle_key_event(&mut app, key) {
                    break;
                }
            }
        }
    }
    Ok(())
}

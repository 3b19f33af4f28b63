//! TradeLog TUI — calendar-centric trading journal in the terminal.
//!
//! Panels:
//! 1. Dashboard — compact month calendar with profit/loss coloring and totals
//! 2. Journal — detailed month calendar plus the selected day's log
//! 3. Help — keyboard shortcuts

mod app;
mod input;
mod persistence;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use tradelog_core::api::{ApiClient, ApiConfig, Session};
use tradelog_core::journal::Journal;
use tradelog_core::sample;
use tradelog_core::source::{ApiSource, JournalSource, StaticSource};

use crate::app::AppState;

#[derive(Parser, Debug)]
#[command(name = "tradelog-tui", about = "Terminal trading journal dashboard")]
struct Args {
    /// Fetch the journal from the HTTP API instead of the built-in sample data.
    #[arg(long)]
    api: bool,

    /// Path to the API config file (TOML). Defaults to the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Select this date at startup (YYYY-MM-DD), overriding saved state.
    #[arg(long)]
    date: Option<NaiveDate>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let config_root = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tradelog");
    let state_path = config_root.join("state.json");

    let persisted = persistence::load(&state_path);
    let selected = args.date.unwrap_or(persisted.selected_date);

    let (source, source_name) = build_source(&args, &config_root)?;

    // Fetch the selected month up front; fall back to an empty journal with
    // an error message in the status bar rather than refusing to start.
    let (journal, load_error) = match source.fetch_month(selected.year(), selected.month()) {
        Ok(journal) => (journal, None),
        Err(err) => (Journal::new(), Some(err.to_string())),
    };

    let mut app = AppState::new(journal, source_name, selected);
    persistence::apply(&mut app, persisted);
    if let Some(date) = args.date {
        app.selected = date;
    }
    if let Some(msg) = load_error {
        app.set_error(format!("Load failed: {msg}"));
    }

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, source.as_ref());

    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn build_source(args: &Args, config_root: &PathBuf) -> Result<(Box<dyn JournalSource>, String)> {
    if args.api {
        let config_path = args
            .config
            .clone()
            .unwrap_or_else(|| config_root.join("config.toml"));
        let config = if config_path.exists() {
            ApiConfig::from_file(&config_path)
                .with_context(|| format!("reading {}", config_path.display()))?
        } else {
            ApiConfig::default()
        };

        let session = Session::load(&config_root.join("session.json"));
        let client = ApiClient::with_token(&config, session.token)?;

        let source = ApiSource::new(client);
        let name = source.name().to_string();
        Ok((Box::new(source), name))
    } else {
        let source = StaticSource::new(sample::sample_journal());
        let name = source.name().to_string();
        Ok((Box::new(source), name))
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    source: &dyn JournalSource,
) -> Result<()> {
    let mut loaded_month = (app.selected.year(), app.selected.month());

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll for input events (50ms timeout for ~20 FPS tick).
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // Refetch when the selection crosses into a month we haven't loaded.
        let month = (app.selected.year(), app.selected.month());
        if month != loaded_month {
            match source.fetch_month(month.0, month.1) {
                Ok(journal) => {
                    for (_, record) in journal.iter() {
                        app.journal.insert(record.clone());
                    }
                }
                Err(err) => app.set_error(format!("Load failed: {err}")),
            }
            loaded_month = month;
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}

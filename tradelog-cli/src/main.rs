//! TradeLog CLI — journal inspection and account commands.
//!
//! Commands:
//! - `login` / `logout` / `register` — manage the stored API session
//! - `month` — print a month calendar with daily pnl
//! - `show` — print one day's log (totals, note, trade reviews)
//! - `trades` / `notes` / `playbooks` / `events` — list raw API resources

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};

use tradelog_core::api::types::{
    EventDay, NoteListResponse, PlaybookListResponse, TradeListResponse,
};
use tradelog_core::api::{ApiClient, ApiConfig, Session};
use tradelog_core::calendar::{month_grid, month_totals, MonthGrid};
use tradelog_core::domain::date_key;
use tradelog_core::sample;
use tradelog_core::source::{ApiSource, JournalSource, StaticSource};
use tradelog_core::summary::{day_view, format_pnl, DayView};

#[derive(Parser)]
#[command(name = "tradelog", about = "TradeLog CLI — trading journal over HTTP")]
struct Cli {
    /// Read journal data from the HTTP API instead of the built-in sample.
    #[arg(long, global = true)]
    api: bool,

    /// Path to the API config file (TOML). Defaults to the user config dir.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the bearer token for later commands.
    Login {
        #[arg(long)]
        username: String,

        /// Password. Read from stdin when omitted.
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored session token.
    Logout,
    /// Create a new account.
    Register {
        #[arg(long)]
        username: String,

        /// Password. Read from stdin when omitted.
        #[arg(long)]
        password: Option<String>,

        /// Avatar identifier shown in the dashboard header.
        #[arg(long)]
        avatar: Option<String>,
    },
    /// Print the month calendar with daily pnl and totals.
    Month {
        /// Month to show as YYYY-MM. Defaults to the sample month.
        month: Option<String>,
    },
    /// Print one day's log: totals, note, and trade reviews.
    Show {
        /// Date to show (YYYY-MM-DD).
        date: NaiveDate,
    },
    /// List trades, optionally filtered to one day.
    Trades {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List notes, optionally filtered to one day.
    Notes {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List playbooks.
    Playbooks,
    /// List upcoming market events.
    Events,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_root = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tradelog");
    let session_path = config_root.join("session.json");
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| config_root.join("config.toml"));

    match cli.command {
        Commands::Login { username, password } => {
            let password = resolve_password(password)?;
            let mut client = api_client(&config_path, &session_path)?;
            let token = client.login(&username, &password)?;
            let session = Session { token: Some(token) };
            session.save(&session_path)?;
            println!("Logged in as {username}.");
            Ok(())
        }
        Commands::Logout => {
            let mut session = Session::load(&session_path);
            if !session.is_authenticated() {
                println!("Not logged in.");
                return Ok(());
            }
            session.clear();
            session.save(&session_path)?;
            println!("Logged out.");
            Ok(())
        }
        Commands::Register {
            username,
            password,
            avatar,
        } => {
            let password = resolve_password(password)?;
            let client = api_client(&config_path, &session_path)?;
            client.register(&username, &password, avatar.as_deref())?;
            println!("Account created. Run `tradelog login` to sign in.");
            Ok(())
        }
        Commands::Month { month } => {
            let (year, month) = parse_month(month.as_deref())?;
            let source = journal_source(cli.api, &config_path, &session_path)?;
            let journal = source.fetch_month(year, month)?;
            let grid = month_grid(&journal, year, month, None);
            print_month(&grid);
            let totals = month_totals(&journal, year, month);
            println!();
            println!(
                "Month PNL: {}   Trades: {}   Days logged: {}",
                format_pnl(totals.pnl),
                totals.trade_count,
                totals.days_logged
            );
            Ok(())
        }
        Commands::Show { date } => {
            let source = journal_source(cli.api, &config_path, &session_path)?;
            let journal = source.fetch_month(date.year(), date.month())?;
            print_day(&day_view(&journal, date));
            Ok(())
        }
        Commands::Trades { date } => {
            let client = api_client(&config_path, &session_path)?;
            let filter = date.map(date_key);
            let filter: Vec<(&str, &str)> = match &filter {
                Some(key) => vec![("date", key.as_str())],
                None => Vec::new(),
            };
            let body: TradeListResponse = client.get_trades(&filter)?.json()?;
            if body.trades.is_empty() {
                println!("No trades.");
                return Ok(());
            }
            println!(
                "{:<6} {:<8} {:<6} {:>10}  {}",
                "ID", "Ticker", "Result", "PNL", "Entry"
            );
            for t in &body.trades {
                println!(
                    "{:<6} {:<8} {:<6} {:>10}  {}",
                    t.id,
                    t.ticker,
                    t.result,
                    format_pnl(t.total_pnl),
                    t.entry_datetime
                );
            }
            Ok(())
        }
        Commands::Notes { date } => {
            let client = api_client(&config_path, &session_path)?;
            let filter = date.map(date_key);
            let filter: Vec<(&str, &str)> = match &filter {
                Some(key) => vec![("date", key.as_str())],
                None => Vec::new(),
            };
            let body: NoteListResponse = client.get_notes(&filter)?.json()?;
            if body.notes.is_empty() {
                println!("No notes.");
                return Ok(());
            }
            for n in &body.notes {
                println!("[{}] {} ({})", n.id, n.title, n.created_at);
                println!("  {}", n.content);
            }
            Ok(())
        }
        Commands::Playbooks => {
            let client = api_client(&config_path, &session_path)?;
            let body: PlaybookListResponse = client.get_playbooks()?.json()?;
            if body.playbooks.is_empty() {
                println!("No playbooks.");
                return Ok(());
            }
            for p in &body.playbooks {
                println!(
                    "{}  {}  entry: {}, model: {}, grade: {}",
                    p.playbook_id, p.title, p.entry_model, p.trade_model, p.setup_grade
                );
            }
            Ok(())
        }
        Commands::Events => {
            let client = api_client(&config_path, &session_path)?;
            let days: Vec<EventDay> = client.get_events()?.json()?;
            for day in &days {
                println!("{}", day.date);
                for event in &day.events {
                    match &event.symbol {
                        Some(symbol) => {
                            println!(
                                "  {:<8} {:<6} {}: {}",
                                event.kind, event.time, symbol, event.details
                            )
                        }
                        None => println!("  {:<8} {:<6} {}", event.kind, event.time, event.details),
                    }
                }
            }
            Ok(())
        }
    }
}

fn api_client(config_path: &PathBuf, session_path: &PathBuf) -> Result<ApiClient> {
    let config = if config_path.exists() {
        ApiConfig::from_file(config_path)
            .with_context(|| format!("reading {}", config_path.display()))?
    } else {
        ApiConfig::default()
    };
    let session = Session::load(session_path);
    Ok(ApiClient::with_token(&config, session.token)?)
}

fn journal_source(
    api: bool,
    config_path: &PathBuf,
    session_path: &PathBuf,
) -> Result<Box<dyn JournalSource>> {
    if api {
        Ok(Box::new(ApiSource::new(api_client(
            config_path,
            session_path,
        )?)))
    } else {
        Ok(Box::new(StaticSource::new(sample::sample_journal())))
    }
}

fn resolve_password(password: Option<String>) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }
    print!("Password: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("empty password");
    }
    Ok(password)
}

/// Parse `YYYY-MM`; defaults to the sample journal's month.
fn parse_month(arg: Option<&str>) -> Result<(i32, u32)> {
    match arg {
        None => {
            let date = sample::default_selected_date();
            Ok((date.year(), date.month()))
        }
        Some(s) => {
            let (year, month) = s
                .split_once('-')
                .with_context(|| format!("expected YYYY-MM, got {s:?}"))?;
            let year: i32 = year.parse().with_context(|| format!("bad year in {s:?}"))?;
            let month: u32 = month
                .parse()
                .with_context(|| format!("bad month in {s:?}"))?;
            if !(1..=12).contains(&month) {
                bail!("month out of range: {month}");
            }
            Ok((year, month))
        }
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn print_month(grid: &MonthGrid) {
    let name = MONTH_NAMES
        .get(grid.month as usize - 1)
        .copied()
        .unwrap_or("?");
    println!("=== {} {} ===", name, grid.year);
    println!(
        "{:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"
    );

    let mut row: Vec<String> = Vec::new();
    for _ in 0..grid.leading_blanks {
        row.push(String::new());
    }
    for cell in &grid.cells {
        let text = if cell.outcome.is_some() {
            format!("{} {}", cell.day, format_pnl(cell.pnl))
        } else {
            cell.day.to_string()
        };
        row.push(text);
        if row.len() == 7 {
            print_week(&row);
            row.clear();
        }
    }
    if !row.is_empty() {
        while row.len() < 7 {
            row.push(String::new());
        }
        print_week(&row);
    }
}

fn print_week(row: &[String]) {
    let cells: Vec<String> = row.iter().map(|c| format!("{c:>10}")).collect();
    println!("{}", cells.join(" "));
}

fn print_day(view: &DayView) {
    match view {
        DayView::Empty { date } => {
            println!("=== {} ===", date_key(*date));
            println!("No trades or notes for this day.");
        }
        DayView::Logged(summary) => {
            println!("=== {} ===", date_key(summary.date));
            println!("Total PNL: {}", format_pnl(summary.total_pnl));
            println!(
                "Trades: {}   Wins: {}   Losses: {}",
                summary.trade_count, summary.wins, summary.losses
            );
            println!();
            if summary.note.is_empty() {
                println!("Notes: (none)");
            } else {
                println!("Notes: {}", summary.note);
            }
            if summary.reviews.is_empty() {
                return;
            }
            println!();
            println!("--- Trade Reviews ---");
            for review in &summary.reviews {
                println!(
                    "{:<8} {:>10}  {}",
                    review.ticker,
                    format_pnl(review.pnl),
                    if review.win { "win" } else { "loss" }
                );
                if !review.note.is_empty() {
                    println!("  {}", review.note);
                }
                if !review.before_image.is_empty() || !review.after_image.is_empty() {
                    println!(
                        "  before: {}  after: {}",
                        or_dash(&review.before_image),
                        or_dash(&review.after_image)
                    );
                }
            }
        }
    }
}

fn or_dash(image: &str) -> &str {
    if image.is_empty() {
        "-"
    } else {
        image
    }
}

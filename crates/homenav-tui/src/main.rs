//! Homenav TUI - terminal host for the homenav home menu.
//!
//! Loads the configured applications, wires them into a
//! [`HomeMenuController`] with a session-scoped last-app store, and drives it
//! from terminal key events.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use homenav_core::config::{Config, Directories};
use homenav_core::{
    ApplicationDirectory, HomeMenuController, LastApplicationStore, SessionFileStore,
    StaticDirectory, default_session_id, filter,
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use std::io;

mod app;
mod cli;
mod colors;
mod input;
mod render;
mod widgets;

use app::App;
use cli::{Cli, Commands};
use render::{render_app_view, render_home_menu};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Set up logging with file output. TUI must log to file since it uses the terminal for display.
fn setup_logging(debug_flag: bool) {
    let level = if debug_flag || cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let log_filename = format!("homenav-tui-{timestamp}.log");
    let log_path = std::path::Path::new("/tmp").join(&log_filename);

    let symlink_path = std::path::Path::new("/tmp/homenav-tui.log");
    let _ = std::fs::remove_file(symlink_path);
    let _ = std::os::unix::fs::symlink(&log_path, symlink_path);

    let file_appender = tracing_appender::rolling::never("/tmp", &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    std::mem::forget(guard);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let dirs = Directories::new();
    let config_path = cli.config.clone().unwrap_or_else(|| dirs.config_file.clone());
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let session_id = cli.session.clone().unwrap_or_else(default_session_id);
    let store = SessionFileStore::new(&dirs, &session_id);
    debug!(
        "Session '{}' at {}",
        session_id,
        store.session_dir().display()
    );

    match cli.command {
        Some(Commands::Apps) => list_apps(&config),
        Some(Commands::Query { query }) => search_query(&config, &query),
        Some(Commands::Last) => show_last(&store),
        Some(Commands::Tui) | None => run_tui(config, store).await?,
    }

    Ok(())
}

async fn run_tui(config: Config, store: SessionFileStore) -> Result<()> {
    let directory = StaticDirectory::from_config(&config).context("Invalid app configuration")?;
    let controller = HomeMenuController::new(directory, store);

    let mut app = App::new(controller, config.home_menu);
    app.initialize();
    info!(
        "Started with {} apps",
        app.controller.directory().list_applications().len()
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = app.controller.store().end_session() {
        warn!("Failed to end session: {}", e);
    }

    result
}

async fn event_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| ui(f, app))?;
            needs_render = false;
        }

        let Some(event_result) = event_stream.next().await else {
            break;
        };

        let event = match event_result {
            Ok(e) => e,
            Err(e) => {
                error!("Event stream error: {}", e);
                continue;
            }
        };

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                debug!("KEY EVENT: code={:?}, modifiers={:?}", key.code, key.modifiers);
                app.handle_key(key);
                needs_render = true;
            }
            Event::Resize(..) => needs_render = true,
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    if app.controller.state().is_home_menu() {
        render_home_menu(f, app);
    } else {
        render_app_view(f, app);
    }
}

fn list_apps(config: &Config) {
    println!("\nConfigured Apps:\n================\n");

    if config.apps.is_empty() {
        println!("No apps configured.");
    } else {
        for app in &config.apps {
            let start = if config.start_app.as_deref() == Some(app.id.as_str()) {
                " [start]"
            } else {
                ""
            };
            println!("  {:<16} {} ({}){start}", app.id, app.name, app.action_id);
        }
    }

    println!();
}

fn search_query(config: &Config, query: &str) {
    println!("Searching: {query}");

    let results = filter(&config.apps, query);
    println!();
    if results.is_empty() {
        println!("{}", config.home_menu.empty_message);
    } else {
        println!("Results: {} apps", results.len());
        for (i, app) in results.iter().enumerate() {
            println!("  {}. {} [{}]", i + 1, app.name, app.id);
        }
    }
}

fn show_last(store: &SessionFileStore) {
    match store.load() {
        Some(record) => println!("{} ({})", record.id, record.action_id),
        None => println!("No last app recorded for this session"),
    }
}

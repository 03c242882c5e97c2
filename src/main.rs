//! ZYNC — terminal companion shell for the ZYNC WiFi scanner.
//!
//! Run the binary to open the dashboard.  Theme and font size picked in the
//! settings view are remembered across runs.

mod app;
mod config;
mod core;
mod platform;
mod ui;

use std::fs::File;
use std::io::{self, stderr};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use crate::app::{
    collab::PlaceholderLink,
    event::{spawn_event_reader, AppEvent},
    handler,
    state::ZyncShell,
};
use crate::config::SettingsStore;
use crate::platform::appearance::EnvAppearanceProbe;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), version, about = "ZYNC scanner companion shell")]
struct Cli {
    /// Directory holding `settings.json` (defaults to the platform config dir).
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Write logs here instead of stderr (the UI owns the terminal).
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the settings file path and exit.
    #[arg(long)]
    print_config_path: bool,
}

// ───────────────────────────────────────── logging ───────────

/// Log to `--log-file` when given; otherwise to stderr, but only if
/// `RUST_LOG` asks for it, since stderr is also the drawing surface.
fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if std::env::var_os("RUST_LOG").is_some() => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    let store = SettingsStore::resolve(cli.config_dir);
    if cli.print_config_path {
        println!("{}", store.path().display());
        return Ok(());
    }

    // Preferences are loaded (and the window painted) before the first frame.
    let mut shell = ZyncShell::new(store, Box::new(EnvAppearanceProbe), Box::new(PlaceholderLink));

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut shell).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Draw, then handle exactly one event, until the shell asks to quit.
async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    shell: &mut ZyncShell,
) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(250));

    loop {
        terminal.draw(|frame| ui::draw(frame, shell))?;

        match events.recv().await {
            Some(AppEvent::Key(key)) => handler::handle_key(shell, key),
            Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) => {}
            None => break,
        }

        if shell.should_quit {
            break;
        }
    }
    Ok(())
}

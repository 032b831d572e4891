//! Terminal frontend for the tactoe engine.
//!
//! A thin adapter over [`tactoe_core`]: it renders board snapshots,
//! forwards key presses, and maps core outcomes and rejections to the
//! status line. All game logic lives in the core crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use app::{App, Control};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tactoe_core::Player;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Mark the human plays, selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mark {
    /// Play as X.
    X,
    /// Play as O.
    O,
}

impl From<Mark> for Player {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Player::X,
            Mark::O => Player::O,
        }
    }
}

/// Play tic-tac-toe against a perfect-play engine.
#[derive(Parser, Debug)]
#[command(name = "tactoe")]
#[command(about = "Tic-tac-toe against a minimax engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Mark the human plays; the computer takes the other one.
    #[arg(long, value_enum, default_value_t = Mark::X)]
    plays: Mark,

    /// Log file path. Logging goes to a file so it does not corrupt
    /// the alternate screen.
    #[arg(long, default_value = "tactoe.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(plays = ?cli.plays, "starting tactoe");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(cli.plays.into());
    let res = run(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Event loop: redraw, then poll for key presses.
///
/// The engine's reply runs to completion inside the key handler; on a
/// 3x3 board the search finishes well within a frame.
fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            info!("user quit");
            return Ok(());
        }
    }
}

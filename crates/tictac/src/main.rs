//! tictac - terminal tic-tac-toe with an unbeatable computer opponent.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    style::Print,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tictac::{App, Cli, Command, Control, Cue, GameConfig, GameMode, Side, analyze, draw};
use tictac_engine::{Board, Player, SearchResult, select_move};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            x_name,
            o_name,
        } => run_play(config, mode, x_name, o_name).await,
        Command::Analyze { board, side, json } => run_analyze(&board, side, json),
    }
}

/// Print the analysis of a single board
fn run_analyze(board: &str, side: Option<Side>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let board: Board = board.parse().context("Invalid board")?;
    let analysis = analyze(&board, side.map(Player::from));

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", analysis);
    }

    Ok(())
}

/// Run the interactive terminal game
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_play(
    config_path: PathBuf,
    mode: Option<GameMode>,
    x_name: Option<String>,
    o_name: Option<String>,
) -> Result<()> {
    let config =
        GameConfig::load_or_default(&config_path)?.with_overrides(mode, x_name, o_name);

    // Log to a file so output does not tear the screen
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tictac");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let sound = *config.sound();
    let res = run_app(&mut terminal, App::new(config), sound).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    sound: bool,
) -> Result<()> {
    let (result_tx, mut result_rx) = mpsc::unbounded_channel::<(Board, SearchResult)>();

    loop {
        terminal.draw(|f| draw(f, &app))?;

        // The full-tree search can take a moment, so keep it off this thread
        if let Some(request) = app.take_search_request() {
            let tx = result_tx.clone();
            tokio::task::spawn_blocking(move || {
                let result = select_move(&request.board, request.side);
                if tx.send((request.board, result)).is_err() {
                    debug!("UI gone before search finished");
                }
            });
        }

        while let Ok((board, result)) = result_rx.try_recv() {
            app.complete_search(board, result);
        }

        if let Some(cue) = app.take_cue() {
            if sound {
                // One bell per placed mark, two when the game ends
                let bells = match cue {
                    Cue::Move => "\x07",
                    Cue::GameOver => "\x07\x07",
                };
                execute!(terminal.backend_mut(), Print(bells))?;
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code) == Control::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
        }
    }
}

//! Tiles - terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use tiles_engine::GameEngine;
use tiles_tui::{App, Cli, Command, SoundBoard, TerminalBell, TilesConfig, logging, terminal};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TilesConfig::load(cli.config.as_deref())?;

    match cli.command() {
        Command::Play => run_play(&config),
        Command::Replay { moves, json } => run_replay(&moves, json),
    }
}

/// Run the interactive terminal game.
fn run_play(config: &TilesConfig) -> Result<()> {
    logging::init_file(config.log_file())?;
    info!(?config, "Starting tiles");

    let mut engine = GameEngine::new();
    engine.subscribe(SoundBoard::new(TerminalBell, *config.audio()));

    let mut app = App::new(engine, *config.ui().show_hints());
    terminal::run(&mut app)
}

/// Replay moves without a UI and print the result.
fn run_replay(moves: &[String], json: bool) -> Result<()> {
    logging::init_stderr();

    let state = tiles_tui::replay(moves);
    println!("{}", tiles_tui::render_replay(&state, json)?);
    Ok(())
}

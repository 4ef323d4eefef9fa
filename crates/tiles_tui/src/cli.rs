//! Command-line interface for tiles.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tiles - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tiles")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tiles.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play,

    /// Apply a sequence of moves without a UI and print the final state
    Replay {
        /// Cells to play in order: indices 0-8 or labels like `center`
        #[arg(required = true, value_delimiter = ',')]
        moves: Vec<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["tiles"]).unwrap();
        assert_eq!(cli.command(), Command::Play);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_replay_accepts_commas_and_spaces() {
        let cli = Cli::try_parse_from(["tiles", "replay", "0,3,1", "center", "--json"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Replay {
                moves: vec!["0".into(), "3".into(), "1".into(), "center".into()],
                json: true,
            }
        );
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["tiles", "play", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tiles", "replay"]).is_err());
    }
}

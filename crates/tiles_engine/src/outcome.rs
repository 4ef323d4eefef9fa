//! Game outcome classification.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Terminal or non-terminal classification of a game session.
///
/// Serialized as `in-progress`, `x-wins`, `o-wins` and `draw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// X owns a line.
    XWins,
    /// O owns a line.
    OWins,
    /// All nine squares are filled and nobody owns a line.
    Draw,
}

impl Outcome {
    /// The outcome of `player` completing a line.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// True once the game no longer accepts moves.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::XWins => write!(f, "X Wins"),
            Outcome::OWins => write!(f, "O Wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

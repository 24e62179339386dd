//! Rules engine trait for game implementations.
//!
//! The turn loop talks to the rules only through this trait:
//! - What moves are legal
//! - How a move changes the state
//! - Whether the game is over and who won

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameState, LegalMoves, MoveOutcome, Pit, Player};
use crate::error::MoveError;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly larger store.
    Winner(Player),
    /// Equal stores.
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }

    /// Numeric form: the winner's number, or 0 for a draw.
    #[must_use]
    pub fn code(&self) -> u8 {
        self.winner().map_or(0, Player::number)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_move`: must leave `state` untouched when it returns `Err`
/// - `is_terminal`: return `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Opening position for this configuration.
    fn initial_state(&self) -> GameState {
        GameState::new(self.config())
    }

    /// Pits the player to move may pick up.
    fn legal_moves(&self, state: &GameState) -> LegalMoves;

    /// Apply a move for the player to move.
    fn apply_move(&self, state: &mut GameState, pit: Pit) -> Result<MoveOutcome, MoveError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Check whether a pit is a legal choice right now.
    fn is_legal(&self, state: &GameState, pit: Pit) -> bool {
        self.legal_moves(state).contains(&pit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_winner() {
        assert_eq!(GameResult::Winner(Player::Two).winner(), Some(Player::Two));
        assert_eq!(GameResult::Draw.winner(), None);
    }

    #[test]
    fn test_game_result_code() {
        assert_eq!(GameResult::Winner(Player::One).code(), 1);
        assert_eq!(GameResult::Winner(Player::Two).code(), 2);
        assert_eq!(GameResult::Draw.code(), 0);
    }

    #[test]
    fn test_game_result_display() {
        assert_eq!(GameResult::Winner(Player::One).to_string(), "Player 1 wins");
        assert_eq!(GameResult::Draw.to_string(), "draw");
    }
}

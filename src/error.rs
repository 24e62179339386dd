//! Structured error types.

use std::path::PathBuf;

use crate::core::{Pit, Player};

/// Errors produced when selecting or applying a move.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Pit selector outside 1..=6. Raised before the engine is involved.
    #[error("pit {0} is out of range (expected 1-6)")]
    InvalidPit(u8),

    /// The selected pit holds no seeds. The board is left untouched.
    #[error("{player} pit {pit} is empty")]
    EmptyPit { player: Player, pit: Pit },

    #[error("the game is already over")]
    GameOver,
}

/// A player number other than 1 or 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("player must be 1 or 2, got {0}")]
pub struct InvalidPlayer(pub u8);

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised by the random-game simulator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("game {game}: board holds {found} seeds after move {ply}, expected {expected}")]
    SeedDrift {
        game: u32,
        ply: u32,
        expected: u32,
        found: u32,
    },

    #[error("game {game}: {player} has no legal move but the game is not over")]
    Stalled { game: u32, player: Player },

    #[error("game {game}: legal move refused: {source}")]
    Rejected { game: u32, source: MoveError },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::EmptyPit {
            player: Player::Two,
            pit: Pit::new(3).unwrap(),
        };
        assert_eq!(err.to_string(), "Player 2 pit 3 is empty");
        assert_eq!(
            MoveError::InvalidPit(9).to_string(),
            "pit 9 is out of range (expected 1-6)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("seeds_per_pit must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: seeds_per_pit must be >= 1"
        );
    }

    #[test]
    fn test_simulation_error_display() {
        let err = SimulationError::SeedDrift {
            game: 3,
            ply: 17,
            expected: 48,
            found: 47,
        };
        assert_eq!(
            err.to_string(),
            "game 3: board holds 47 seeds after move 17, expected 48"
        );
    }
}

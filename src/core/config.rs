//! Game configuration, loadable from TOML.
//!
//! ```toml
//! seeds_per_pit = 4
//! starting_player = 1
//! ```
//!
//! Missing keys fall back to standard Kalah.

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use super::board::DEFAULT_SEEDS_PER_PIT;
use super::player::Player;
use crate::error::ConfigError;

/// Largest seeds-per-pit value accepted. Twelve pits of 20 seeds is 240,
/// which still fits a single `u8` store.
pub const MAX_SEEDS_PER_PIT: u8 = 20;

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seeds placed in each of the twelve pits at the start.
    pub seeds_per_pit: u8,

    /// Who moves first.
    pub starting_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seeds_per_pit: DEFAULT_SEEDS_PER_PIT,
            starting_player: Player::One,
        }
    }
}

impl GameConfig {
    /// Standard Kalah: four seeds per pit, Player 1 starts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seeds_per_pit(mut self, seeds: u8) -> Self {
        self.seeds_per_pit = seeds;
        self
    }

    #[must_use]
    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self
    }

    /// Seeds on the board for the whole game.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        12 * u32::from(self.seeds_per_pit)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seeds_per_pit == 0 {
            return Err(ConfigError::Validation(
                "seeds_per_pit must be >= 1".into(),
            ));
        }
        if self.seeds_per_pit > MAX_SEEDS_PER_PIT {
            return Err(ConfigError::Validation(format!(
                "seeds_per_pit must be <= {MAX_SEEDS_PER_PIT}"
            )));
        }
        Ok(())
    }

    /// Render the default configuration as TOML.
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&GameConfig::default())?)
    }
}

//! Move resolution and the `RulesEngine` implementation.

use log::debug;

use super::capture::capture;
use super::endgame::{determine_winner, is_game_over, sweep_remaining};
use super::sowing::sow;
use crate::core::{
    Board, GameConfig, GameState, LegalMoves, Move, MoveOutcome, Pit, Player, MAX_SEEDS_PER_PIT,
};
use crate::error::{ConfigError, MoveError};
use crate::rules::{GameResult, RulesEngine};

/// Fresh board with `seeds_per_pit` in each of the twelve pits.
#[must_use]
pub fn initialize(seeds_per_pit: u8) -> Board {
    Board::new(seeds_per_pit)
}

/// Resolve one move on `board`.
///
/// Picks up the seeds of `player`'s `pit`, sows them, then applies the
/// extra-turn rule or, failing that, the capture rule. An empty pit is
/// rejected with [`MoveError::EmptyPit`] and the board is not touched.
pub fn apply_move(board: &mut Board, player: Player, pit: Pit) -> Result<MoveOutcome, MoveError> {
    let source = Move::new(player, pit).source_index();
    if board.get(source) == 0 {
        return Err(MoveError::EmptyPit { player, pit });
    }

    let before = board.total();

    let landing = sow(board, player, source);
    let extra_turn = landing == player.store_index();
    let captured = if extra_turn {
        None
    } else {
        capture(board, player, landing)
    };

    debug_assert_eq!(board.total(), before, "seed count changed during a move");

    if let Some(c) = captured {
        debug!(
            "{player} captured {} seeds from pit index {}",
            c.seeds, c.opposite_index
        );
    } else if extra_turn {
        debug!("{player} earned an extra turn");
    }

    Ok(MoveOutcome {
        landing,
        extra_turn,
        capture: captured,
    })
}

/// Kalah rules bound to a configuration.
#[derive(Clone, Debug, Default)]
pub struct Kalah {
    config: GameConfig,
}

impl Kalah {
    /// Bind the rules to `config`, rejecting seed counts the board cannot hold.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl RulesEngine for Kalah {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_moves(&self, state: &GameState) -> LegalMoves {
        state.legal_moves()
    }

    /// Resolve the move, then hand the turn over.
    ///
    /// The mover keeps the turn on an extra turn. When either side runs out of
    /// seeds the board is swept and the result recorded; no further moves are
    /// accepted after that.
    fn apply_move(&self, state: &mut GameState, pit: Pit) -> Result<MoveOutcome, MoveError> {
        if state.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = state.current_player();
        let outcome = apply_move(state.board_mut(), player, pit)?;
        state.record_move();

        if is_game_over(state.board()) {
            sweep_remaining(state.board_mut());
            let result = determine_winner(state.board());
            debug!(
                "game over after {} moves: {result} ({} - {})",
                state.moves_played(),
                state.board().store(Player::One),
                state.board().store(Player::Two)
            );
            state.finish(result);
        } else if !outcome.extra_turn {
            state.pass_turn();
        }

        Ok(outcome)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.outcome()
    }
}

/// Builder for creating a Kalah game.
#[derive(Default)]
pub struct KalahBuilder {
    config: GameConfig,
}

impl KalahBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn seeds_per_pit(mut self, seeds: u8) -> Self {
        assert!(
            (1..=MAX_SEEDS_PER_PIT).contains(&seeds),
            "Seeds per pit must be 1-{MAX_SEEDS_PER_PIT}"
        );
        self.config.seeds_per_pit = seeds;
        self
    }

    pub fn starting_player(mut self, player: Player) -> Self {
        self.config.starting_player = player;
        self
    }

    /// Build the rules and the opening state.
    pub fn build(self) -> (Kalah, GameState) {
        let rules = Kalah {
            config: self.config,
        };
        let state = rules.initial_state();
        (rules, state)
    }
}

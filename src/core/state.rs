//! Turn-loop state: the board plus whose turn it is.
//!
//! `GameState` is plain data. The rules engine is the only thing that moves
//! it forward: it hands the turn over, keeps it on an extra turn, and records
//! the result once the board is swept.

use serde::{Deserialize, Serialize};

use super::action::{LegalMoves, Pit};
use super::board::Board;
use super::config::GameConfig;
use super::player::Player;
use crate::rules::GameResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameResult>,
    moves_played: u32,
}

impl GameState {
    /// Fresh game for the given configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_board(Board::new(config.seeds_per_pit), config.starting_player)
    }

    /// Standard opening position, Player 1 to move.
    #[must_use]
    pub fn initial() -> Self {
        Self::new(&GameConfig::default())
    }

    /// Resume from an arbitrary position.
    #[must_use]
    pub fn with_board(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
            outcome: None,
            moves_played: 0,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.outcome
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Successful moves so far. Rejected moves are not counted.
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Non-empty pits of the player to move.
    #[must_use]
    pub fn legal_moves(&self) -> LegalMoves {
        if self.is_terminal() {
            return LegalMoves::new();
        }

        Pit::all()
            .filter(|&pit| self.board.pit(self.current_player, pit) > 0)
            .collect()
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn record_move(&mut self) {
        self.moves_played += 1;
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.other();
    }

    pub(crate) fn finish(&mut self, result: GameResult) {
        self.outcome = Some(result);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

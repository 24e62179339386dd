//! The turn loop.

use std::io;

use log::{debug, info};

use crate::core::{Board, GameState, Pit, Player};
use crate::error::MoveError;
use crate::rules::{GameResult, RulesEngine};

/// Supplies pit choices for the player to move.
///
/// Range checking happens here, before the engine sees the move: a source
/// only ever hands back a valid [`Pit`].
pub trait MoveSource {
    /// Next pit for `state.current_player()`.
    ///
    /// `Ok(None)` means no more input is coming; the session stops without a
    /// result.
    fn next_move(&mut self, state: &GameState) -> io::Result<Option<Pit>>;
}

/// Read-only view of the game as it progresses.
///
/// Every hook has an empty default so a renderer only implements what it
/// shows.
pub trait Renderer {
    fn board(&mut self, _board: &Board) -> io::Result<()> {
        Ok(())
    }

    fn turn(&mut self, _player: Player) -> io::Result<()> {
        Ok(())
    }

    /// The chosen move was refused; the same player chooses again.
    fn rejected(&mut self, _error: &MoveError) -> io::Result<()> {
        Ok(())
    }

    fn extra_turn(&mut self, _player: Player) -> io::Result<()> {
        Ok(())
    }

    /// Final, swept board and the result.
    fn finished(&mut self, _board: &Board, _result: GameResult) -> io::Result<()> {
        Ok(())
    }
}

/// One game: rules plus the state they act on.
pub struct Session<R: RulesEngine> {
    rules: R,
    state: GameState,
}

impl<R: RulesEngine> Session<R> {
    /// Start from the rules' opening position.
    pub fn new(rules: R) -> Self {
        let state = rules.initial_state();
        Self { rules, state }
    }

    /// Continue from an existing state.
    pub fn with_state(rules: R, state: GameState) -> Self {
        Self { rules, state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play until the game ends or the source runs out of moves.
    ///
    /// Each iteration shows the board, asks the source for a pit and applies
    /// it. A refused move is reported and the same player is asked again; the
    /// turn only changes hands after a successful move without an extra turn.
    pub fn run<S, V>(&mut self, source: &mut S, renderer: &mut V) -> io::Result<Option<GameResult>>
    where
        S: MoveSource + ?Sized,
        V: Renderer + ?Sized,
    {
        while self.rules.is_terminal(&self.state).is_none() {
            renderer.board(self.state.board())?;
            let player = self.state.current_player();
            renderer.turn(player)?;

            let Some(pit) = source.next_move(&self.state)? else {
                info!("input ended before the game finished");
                return Ok(None);
            };

            match self.rules.apply_move(&mut self.state, pit) {
                Ok(outcome) => {
                    if outcome.extra_turn && self.rules.is_terminal(&self.state).is_none() {
                        renderer.extra_turn(player)?;
                    }
                }
                Err(err) => {
                    debug!("move refused: {err}");
                    renderer.rejected(&err)?;
                }
            }
        }

        let Some(result) = self.rules.is_terminal(&self.state) else {
            return Ok(None);
        };
        info!("{result} after {} moves", self.state.moves_played());
        renderer.finished(self.state.board(), result)?;
        Ok(Some(result))
    }
}

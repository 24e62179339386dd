//! # mancala
//!
//! A rules engine for Kalah, the common Mancala variant: six pits a side,
//! four seeds a pit, captures and extra turns.
//!
//! ## Design Principles
//!
//! 1. **I/O-free engine**: sowing, captures and scoring are plain functions
//!    over a `Copy` board. Nothing in `games` or `rules` reads input or
//!    prints.
//!
//! 2. **Explicit state**: the turn loop passes a `GameState` around instead
//!    of keeping the board and current player in globals.
//!
//! 3. **Transparent rejections**: a refused move leaves the state exactly as
//!    it was, so callers can simply ask again.
//!
//! ## Modules
//!
//! - `core`: Players, pits, board, configuration, RNG, turn state
//! - `rules`: `RulesEngine` trait and `GameResult`
//! - `games`: The Kalah rule set
//! - `session`: Turn loop and seeded random simulation
//! - `render`: Text board drawing
//! - `console`: Menu, keyboard input and terminal output
//! - `error`: Structured error types

pub mod console;
pub mod core;
pub mod error;
pub mod games;
pub mod render;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Capture, GameConfig, GameRng, GameState, LegalMoves, Move, MoveOutcome, Pit, Player,
    PlayerMap,
};

pub use crate::error::{ConfigError, InvalidPlayer, MoveError, SimulationError};

pub use crate::games::kalah::{
    apply_move, determine_winner, initialize, is_game_over, sweep_remaining, Kalah, KalahBuilder,
};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::session::{simulate, MoveSource, Renderer, Session, SimulationReport};

//! Core types: players, pits, the board, configuration, RNG and turn state.
//!
//! Nothing here knows the sowing or capture rules; those live in
//! [`crate::games::kalah`].

pub mod action;
pub mod board;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Capture, LegalMoves, Move, MoveOutcome, Pit};
pub use board::{
    Board, DEFAULT_SEEDS_PER_PIT, PITS_PER_SIDE, PLAYER_ONE_STORE, PLAYER_TWO_STORE, SLOT_COUNT,
};
pub use config::{GameConfig, MAX_SEEDS_PER_PIT};
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use state::GameState;

//! Kalah: six pits a side, four seeds a pit, captures and extra turns.
//!
//! - Pick up every seed in one of your pits and sow them one per slot,
//!   counter-clockwise, skipping your opponent's store
//! - Last seed in your own store: move again
//! - Last seed in one of your own empty pits, facing a non-empty pit: capture
//!   both into your store
//! - When either side runs dry, each player banks what is left on their side
//!   and the larger store wins
//!
//! The free functions below are the engine proper and do no I/O. [`Kalah`]
//! wraps them in [`RulesEngine`](crate::rules::RulesEngine) together with
//! turn handoff.

mod capture;
mod endgame;
mod game;
mod sowing;

pub use capture::capture;
pub use endgame::{determine_winner, is_game_over, sweep_remaining};
pub use game::{apply_move, initialize, Kalah, KalahBuilder};
pub use sowing::{next_slot, sow};

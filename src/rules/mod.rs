//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for each game state
//! - How moves modify state
//! - Win/draw conditions
//!
//! The turn loop calls into `RulesEngine` but never interprets sowing or
//! captures directly.

pub mod engine;

pub use engine::{GameResult, RulesEngine};

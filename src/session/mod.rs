//! Turn loop and batch simulation.
//!
//! [`Session`] owns the game state explicitly and drives it with moves from a
//! [`MoveSource`], reporting to a [`Renderer`]. Neither trait is tied to a
//! terminal, so scripted sources drive the same loop in tests.

pub mod driver;
pub mod simulate;

pub use driver::{MoveSource, Renderer, Session};
pub use simulate::{play_random_game, simulate, SimulationReport};

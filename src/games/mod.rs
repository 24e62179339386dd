//! Concrete rule sets.

pub mod kalah;

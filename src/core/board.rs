//! The 14-slot Kalah board.
//!
//! ```text
//!         12  11  10   9   8   7        <- Player 2 pits (pit 6 .. pit 1)
//!     13                           6    <- stores (Player 2 left, Player 1 right)
//!          0   1   2   3   4   5        <- Player 1 pits (pit 1 .. pit 6)
//! ```
//!
//! Sowing moves counter-clockwise through increasing indices and wraps from
//! 13 back to 0. Every pit faces the pit at `12 - index`.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::action::Pit;
use super::player::Player;

/// Pits on each side of the board.
pub const PITS_PER_SIDE: usize = 6;

/// Pits plus stores.
pub const SLOT_COUNT: usize = 2 * PITS_PER_SIDE + 2;

/// Board index of Player 1's store.
pub const PLAYER_ONE_STORE: usize = PITS_PER_SIDE;

/// Board index of Player 2's store.
pub const PLAYER_TWO_STORE: usize = SLOT_COUNT - 1;

/// Standard Kalah starting seeds per pit.
pub const DEFAULT_SEEDS_PER_PIT: u8 = 4;

/// Seed counts for every pit and store.
///
/// The board is a plain `Copy` value; rules mutate it through `&mut Board`.
/// Counts are unsigned so a slot can never go negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    slots: [u8; SLOT_COUNT],
}

impl Board {
    /// Fresh board: every pit holds `seeds_per_pit`, both stores are empty.
    #[must_use]
    pub fn new(seeds_per_pit: u8) -> Self {
        let mut slots = [seeds_per_pit; SLOT_COUNT];
        slots[PLAYER_ONE_STORE] = 0;
        slots[PLAYER_TWO_STORE] = 0;
        Self { slots }
    }

    /// Build a board from explicit slot counts.
    #[must_use]
    pub const fn from_slots(slots: [u8; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// All 14 slots in index order.
    #[must_use]
    pub const fn slots(&self) -> &[u8; SLOT_COUNT] {
        &self.slots
    }

    /// Seeds at a board index.
    #[must_use]
    pub fn get(&self, index: usize) -> u8 {
        self.slots[index]
    }

    /// Seeds in one of a player's pits.
    #[must_use]
    pub fn pit(&self, player: Player, pit: Pit) -> u8 {
        self.slots[pit.index_for(player)]
    }

    /// A player's six pits, left to right from their side of the table.
    #[must_use]
    pub fn pits(&self, player: Player) -> &[u8] {
        &self.slots[player.pit_range()]
    }

    /// Seeds in a player's store.
    #[must_use]
    pub fn store(&self, player: Player) -> u8 {
        self.slots[player.store_index()]
    }

    /// Seeds still in play on a player's side.
    #[must_use]
    pub fn side_total(&self, player: Player) -> u32 {
        self.pits(player).iter().map(|&s| u32::from(s)).sum()
    }

    /// Seeds on the whole board, stores included.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.slots.iter().map(|&s| u32::from(s)).sum()
    }

    /// The pit directly across the board. Stores have no opposite.
    ///
    /// ```
    /// use mancala::core::Board;
    ///
    /// assert_eq!(Board::opposite(0), Some(12));
    /// assert_eq!(Board::opposite(10), Some(2));
    /// assert_eq!(Board::opposite(6), None);
    /// ```
    #[must_use]
    pub fn opposite(index: usize) -> Option<usize> {
        match index {
            PLAYER_ONE_STORE | PLAYER_TWO_STORE => None,
            i if i < PLAYER_TWO_STORE => Some(2 * PITS_PER_SIDE - i),
            _ => None,
        }
    }

    /// Empty a slot and return what it held.
    pub(crate) fn take(&mut self, index: usize) -> u8 {
        std::mem::take(&mut self.slots[index])
    }

    pub(crate) fn add(&mut self, index: usize, seeds: u8) {
        self.slots[index] += seeds;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SEEDS_PER_PIT)
    }
}

impl Index<usize> for Board {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Kalah is strictly two-player. A `Player` decides which six pits and which
//! store it owns, and which store it must skip while sowing.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Range};

use super::board::{PITS_PER_SIDE, PLAYER_ONE_STORE, PLAYER_TWO_STORE};
use crate::error::InvalidPlayer;

/// One of the two seats at the board.
///
/// Serialized as its number (`1` or `2`) so configuration files read
/// naturally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players in seating order.
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// Look up a player by number.
    ///
    /// ```
    /// use mancala::core::Player;
    ///
    /// assert_eq!(Player::new(2), Some(Player::Two));
    /// assert_eq!(Player::new(3), None);
    /// ```
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The player's number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// 0-based index, for array storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// The opponent.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Board index of this player's store.
    #[must_use]
    pub const fn store_index(self) -> usize {
        match self {
            Player::One => PLAYER_ONE_STORE,
            Player::Two => PLAYER_TWO_STORE,
        }
    }

    /// Board index of the opponent's store, skipped while this player sows.
    #[must_use]
    pub const fn foreign_store_index(self) -> usize {
        self.other().store_index()
    }

    /// Board indices of this player's six pits, left to right.
    #[must_use]
    pub const fn pit_range(self) -> Range<usize> {
        let first = self.first_pit_index();
        first..first + PITS_PER_SIDE
    }

    /// Board index of pit 1 on this player's side.
    #[must_use]
    pub const fn first_pit_index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => PLAYER_ONE_STORE + 1,
        }
    }

    /// Check whether a board index is one of this player's pits.
    #[must_use]
    pub fn owns_pit(self, index: usize) -> bool {
        self.pit_range().contains(&index)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

impl TryFrom<u8> for Player {
    type Error = InvalidPlayer;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Player::new(number).ok_or(InvalidPlayer(number))
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.number()
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use mancala::core::{Player, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::default();
/// wins[Player::Two] += 1;
///
/// assert_eq!(wins[Player::One], 0);
/// assert_eq!(wins[Player::Two], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

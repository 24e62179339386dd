//! Move representation: a pit selector plus the player who picks it up.
//!
//! Pits are numbered 1-6 from each player's own side of the table. The
//! selector is validated when a `Pit` is built, so the rules engine never
//! sees an out-of-range value; it only has to reject empty pits.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::PITS_PER_SIDE;
use super::player::Player;
use crate::error::MoveError;

/// Legal pit choices for one turn. At most six, so never heap-allocated.
pub type LegalMoves = SmallVec<[Pit; PITS_PER_SIDE]>;

/// A pit selector in 1..=6.
///
/// ```
/// use mancala::core::{Pit, Player};
///
/// let pit = Pit::new(1).unwrap();
/// assert_eq!(pit.index_for(Player::One), 0);
/// assert_eq!(pit.index_for(Player::Two), 7);
///
/// assert!(Pit::new(7).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pit(u8);

impl Pit {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = PITS_PER_SIDE as u8;

    /// Validate a pit selector.
    pub fn new(number: u8) -> Result<Self, MoveError> {
        if (Self::MIN..=Self::MAX).contains(&number) {
            Ok(Self(number))
        } else {
            Err(MoveError::InvalidPit(number))
        }
    }

    /// The selector as shown to players (1-6).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Board index of this pit on `player`'s side.
    #[must_use]
    pub const fn index_for(self, player: Player) -> usize {
        player.first_pit_index() + self.0 as usize - 1
    }

    /// All six selectors in order.
    pub fn all() -> impl DoubleEndedIterator<Item = Pit> {
        (Self::MIN..=Self::MAX).map(Pit)
    }
}

impl std::fmt::Display for Pit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Pit {
    type Error = MoveError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Pit::new(number)
    }
}

impl From<Pit> for u8 {
    fn from(pit: Pit) -> Self {
        pit.0
    }
}

/// A player picking up the seeds of one of their pits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub pit: Pit,
}

impl Move {
    #[must_use]
    pub const fn new(player: Player, pit: Pit) -> Self {
        Self { player, pit }
    }

    /// Board index the seeds are picked up from.
    #[must_use]
    pub const fn source_index(self) -> usize {
        self.pit.index_for(self.player)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} plays pit {}", self.player, self.pit)
    }
}

/// Seeds moved into the mover's store by a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Mover's pit where the last seed landed.
    pub pit_index: usize,
    /// The opponent's pit across from it.
    pub opposite_index: usize,
    /// Landing seed plus everything taken from the opposite pit.
    pub seeds: u8,
}

/// What happened during a successfully applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Board index where the last seed was placed.
    pub landing: usize,

    /// Last seed landed in the mover's own store.
    pub extra_turn: bool,

    /// Set only when the capture rule fired. Never set together with
    /// `extra_turn`.
    pub capture: Option<Capture>,
}

impl MoveOutcome {
    /// Seeds captured by this move (0 when no capture happened).
    #[must_use]
    pub fn captured(&self) -> u8 {
        self.capture.map_or(0, |c| c.seeds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pit_range_validation() {
        assert_eq!(Pit::new(0), Err(MoveError::InvalidPit(0)));
        assert_eq!(Pit::new(7), Err(MoveError::InvalidPit(7)));
        for n in 1..=6 {
            assert_eq!(Pit::new(n).unwrap().number(), n);
        }
    }

    #[test]
    fn test_pit_index_mapping() {
        let indices: Vec<_> = Pit::all().map(|p| p.index_for(Player::One)).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);

        let indices: Vec<_> = Pit::all().map(|p| p.index_for(Player::Two)).collect();
        assert_eq!(indices, vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_move_source_index() {
        let mv = Move::new(Player::Two, Pit::new(6).unwrap());
        assert_eq!(mv.source_index(), 12);
        assert_eq!(mv.to_string(), "Player 2 plays pit 6");
    }

    #[test]
    fn test_pit_serde() {
        let pit = Pit::new(4).unwrap();
        assert_eq!(serde_json::to_string(&pit).unwrap(), "4");
        assert!(serde_json::from_str::<Pit>("0").is_err());
    }

    #[test]
    fn test_outcome_captured() {
        let quiet = MoveOutcome {
            landing: 9,
            extra_turn: false,
            capture: None,
        };
        assert_eq!(quiet.captured(), 0);

        let capture = MoveOutcome {
            landing: 2,
            extra_turn: false,
            capture: Some(Capture {
                pit_index: 2,
                opposite_index: 10,
                seeds: 6,
            }),
        };
        assert_eq!(capture.captured(), 6);
    }
}

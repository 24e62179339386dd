//! Seed distribution around the board.

use crate::core::{Board, Player, SLOT_COUNT};

/// Next slot in sowing order (counter-clockwise, wrapping 13 -> 0).
#[must_use]
pub const fn next_slot(index: usize) -> usize {
    (index + 1) % SLOT_COUNT
}

/// Pick up every seed at `source` and sow them one per slot, skipping the
/// opponent's store. Returns the index where the last seed landed.
///
/// A skipped store uses up a step but not a seed. Thirteen or more seeds lap
/// the board and pass the (now empty) source pit again like any other pit.
///
/// The caller must not pass an empty source.
pub fn sow(board: &mut Board, player: Player, source: usize) -> usize {
    let skip = player.foreign_store_index();
    let mut seeds = board.take(source);
    debug_assert!(seeds > 0, "sowing from empty slot {source}");

    let mut current = source;
    while seeds > 0 {
        current = next_slot(current);
        if current == skip {
            continue;
        }
        board.add(current, 1);
        seeds -= 1;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_slot_wraps() {
        assert_eq!(next_slot(0), 1);
        assert_eq!(next_slot(12), 13);
        assert_eq!(next_slot(13), 0);
    }

    #[test]
    fn test_sow_into_own_store() {
        let mut board = Board::default();
        let landing = sow(&mut board, Player::One, 2);
        assert_eq!(landing, 6);
        assert_eq!(
            board.slots(),
            &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]
        );
    }

    #[test]
    fn test_sow_across_to_opponent_side() {
        let mut board = Board::default();
        let landing = sow(&mut board, Player::One, 5);
        assert_eq!(landing, 9);
        assert_eq!(
            board.slots(),
            &[4, 4, 4, 4, 4, 0, 1, 5, 5, 5, 4, 4, 4, 0]
        );
    }

    #[test]
    fn test_player_one_skips_player_two_store() {
        let mut board = Board::from_slots([4, 4, 4, 4, 4, 10, 0, 4, 4, 4, 4, 4, 4, 0]);
        let landing = sow(&mut board, Player::One, 5);
        assert_eq!(landing, 2);
        assert_eq!(board.store(Player::Two), 0);
        assert_eq!(
            board.slots(),
            &[5, 5, 5, 4, 4, 0, 1, 5, 5, 5, 5, 5, 5, 0]
        );
    }

    #[test]
    fn test_player_two_skips_player_one_store() {
        let mut board = Board::from_slots([4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 8, 0]);
        let landing = sow(&mut board, Player::Two, 12);
        // 13, 0..5, skip 6, 7
        assert_eq!(landing, 7);
        assert_eq!(board.store(Player::One), 0);
        assert_eq!(board.store(Player::Two), 1);
        assert_eq!(board.get(12), 0);
        assert_eq!(board.get(7), 5);
    }

    #[test]
    fn test_full_lap_returns_to_source() {
        let mut board = Board::from_slots([13, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0]);
        let landing = sow(&mut board, Player::One, 0);
        assert_eq!(landing, 0);
        assert_eq!(board.get(0), 1);
        assert_eq!(board.get(13), 0);
        assert_eq!(board.total(), 15);
    }

    #[test]
    fn test_sowing_conserves_seeds() {
        let mut board = Board::from_slots([0, 0, 20, 1, 2, 3, 5, 6, 0, 1, 0, 4, 6, 0]);
        let before = board.total();
        sow(&mut board, Player::One, 2);
        assert_eq!(board.total(), before);
    }
}

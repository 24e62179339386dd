//! End-of-game detection and final scoring.

use crate::core::{Board, Player};
use crate::rules::GameResult;

/// The game ends as soon as either side's six pits are all empty.
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    Player::BOTH
        .into_iter()
        .any(|player| board.side_total(player) == 0)
}

/// Move every seed still in a pit into its owner's store.
///
/// Both sides are handled the same way; an empty side adds nothing. Calling
/// this on an already swept board changes nothing.
pub fn sweep_remaining(board: &mut Board) {
    for player in Player::BOTH {
        let mut swept = 0;
        for index in player.pit_range() {
            swept += board.take(index);
        }
        board.add(player.store_index(), swept);
    }
}

/// Compare stores. Call after [`sweep_remaining`].
#[must_use]
pub fn determine_winner(board: &Board) -> GameResult {
    let one = board.store(Player::One);
    let two = board.store(Player::Two);
    match one.cmp(&two) {
        std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
        std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
        std::cmp::Ordering::Equal => GameResult::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_board_is_not_over() {
        assert!(!is_game_over(&Board::default()));
    }

    #[test]
    fn test_either_empty_side_ends_the_game() {
        let one_empty = Board::from_slots([0, 0, 0, 0, 0, 0, 20, 4, 4, 4, 4, 4, 4, 4]);
        assert!(is_game_over(&one_empty));

        let two_empty = Board::from_slots([1, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 27]);
        assert!(is_game_over(&two_empty));

        let both_live = Board::from_slots([1, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 1, 26]);
        assert!(!is_game_over(&both_live));
    }

    #[test]
    fn test_sweep_moves_pits_to_owner_store() {
        let mut board = Board::from_slots([0, 0, 0, 0, 0, 0, 11, 2, 3, 0, 0, 4, 1, 27]);
        sweep_remaining(&mut board);
        assert_eq!(
            board.slots(),
            &[0, 0, 0, 0, 0, 0, 11, 0, 0, 0, 0, 0, 0, 37]
        );
        assert_eq!(board.total(), 48);
    }

    #[test]
    fn test_sweep_handles_both_sides() {
        let mut board = Board::from_slots([1, 2, 0, 0, 0, 0, 5, 0, 0, 3, 0, 0, 0, 7]);
        sweep_remaining(&mut board);
        assert_eq!(board.store(Player::One), 8);
        assert_eq!(board.store(Player::Two), 10);
        assert_eq!(board.side_total(Player::One), 0);
        assert_eq!(board.side_total(Player::Two), 0);
    }

    #[test]
    fn test_sweep_is_idempotent() {
        let mut board = Board::from_slots([0, 0, 0, 0, 0, 0, 11, 2, 3, 0, 0, 4, 1, 27]);
        sweep_remaining(&mut board);
        let once = board;
        sweep_remaining(&mut board);
        assert_eq!(board, once);
    }

    #[test]
    fn test_determine_winner() {
        let board = Board::from_slots([0, 0, 0, 0, 0, 0, 25, 0, 0, 0, 0, 0, 0, 23]);
        assert_eq!(determine_winner(&board), GameResult::Winner(Player::One));

        let board = Board::from_slots([0, 0, 0, 0, 0, 0, 11, 0, 0, 0, 0, 0, 0, 37]);
        assert_eq!(determine_winner(&board), GameResult::Winner(Player::Two));

        let board = Board::from_slots([0, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 24]);
        assert_eq!(determine_winner(&board), GameResult::Draw);
    }
}

//! The capture rule.

use crate::core::{Board, Capture, Player};

/// Capture after a sowing pass that ended at `landing`.
///
/// Fires only when the last seed landed in one of the mover's own pits, that
/// pit now holds exactly one seed, and the opposite pit is not empty. Both
/// pits are emptied into the mover's store. A pit holding exactly one seed
/// after sowing was empty before this pass reached it: the source pit is
/// emptied on pick-up, and any other pit visited twice holds at least two.
///
/// Must not be called when the move earned an extra turn.
pub fn capture(board: &mut Board, player: Player, landing: usize) -> Option<Capture> {
    if !player.owns_pit(landing) || board.get(landing) != 1 {
        return None;
    }
    let opposite_index = Board::opposite(landing)?;
    if board.get(opposite_index) == 0 {
        return None;
    }

    let seeds = board.take(landing) + board.take(opposite_index);
    board.add(player.store_index(), seeds);

    Some(Capture {
        pit_index: landing,
        opposite_index,
        seeds,
    })
}

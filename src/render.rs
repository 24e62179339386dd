//! Plain-text board drawing.
//!
//! ```text
//!            [Pit]
//!       6  5  4  3  2  1
//!    ---------------------
//!    |  4  4  4  4  4  4 |
//!  0 |                   |  0
//!    |  4  4  4  4  4  4 |
//!    ---------------------
//!       1  2  3  4  5  6
//!            [Pit]
//! ```
//!
//! Player 2 sits across the table, so their pits are drawn right to left on
//! top with their store on the left. Player 1's pits run left to right along
//! the bottom into the store on the right.

use std::fmt;

use crate::core::{Board, Pit, Player};

/// `Display` adapter that draws a board.
pub struct TextBoard<'a>(pub &'a Board);

impl fmt::Display for TextBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;

        writeln!(f)?;
        writeln!(f, "           [Pit]")?;

        write!(f, "     ")?;
        for pit in Pit::all().rev() {
            write!(f, " {pit} ")?;
        }
        writeln!(f)?;
        writeln!(f, "   ---------------------")?;

        write!(f, "   | ")?;
        for &seeds in board.pits(Player::Two).iter().rev() {
            write!(f, "{seeds:2} ")?;
        }
        writeln!(f, "|")?;

        writeln!(
            f,
            "{:2} |{:19}| {:2}",
            board.store(Player::Two),
            "",
            board.store(Player::One)
        )?;

        write!(f, "   | ")?;
        for &seeds in board.pits(Player::One) {
            write!(f, "{seeds:2} ")?;
        }
        writeln!(f, "|")?;

        writeln!(f, "   ---------------------")?;
        write!(f, "     ")?;
        for pit in Pit::all() {
            write!(f, " {pit} ")?;
        }
        writeln!(f)?;
        writeln!(f, "           [Pit]")
    }
}

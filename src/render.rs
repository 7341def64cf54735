//! Text rendering of a board.

use core::fmt;

use crate::board::{Board, Cell};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;

impl Cell {
    /// Glyph for this cell. Concealed vessels are drawn as open water.
    pub fn glyph(self, hidden: bool) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Ship if hidden => 'O',
            Cell::Ship => '■',
            Cell::Hit => 'X',
            Cell::Miss => '*',
        }
    }
}

/// Draws the grid with one-based row and column labels:
///
/// ```text
///   1 2 3 4 5 6
/// 1 O O O O O O
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}", c + 1)?;
        }
        for r in 0..BOARD_SIZE {
            write!(f, "\n{}", r + 1)?;
            for c in 0..BOARD_SIZE {
                let cell = self
                    .cell(Coord::new(r as i32, c as i32))
                    .unwrap_or_default();
                write!(f, " {}", cell.glyph(self.is_hidden()))?;
            }
        }
        Ok(())
    }
}

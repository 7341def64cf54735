//! Board coordinates.

use core::fmt;

use crate::config::BOARD_SIZE;

/// A cell address: `x` is the row, `y` the column, both zero-based.
///
/// Components are signed so that coordinates read from outside the board
/// (for example a human typing `0 0`) can still be represented and then
/// rejected by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// Offsets of the eight cells surrounding a coordinate.
const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build a zero-based coordinate from the one-based pair shown to players.
    pub const fn from_one_based(x: i32, y: i32) -> Self {
        Self::new(x.saturating_sub(1), y.saturating_sub(1))
    }

    /// Coordinate shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// `true` when the coordinate lies inside `[0, BOARD_SIZE)²`.
    pub fn in_bounds(self) -> bool {
        let size = BOARD_SIZE as i32;
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }

    /// The eight surrounding coordinates, including ones off the board.
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        NEIGHBOURS.into_iter().map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Row and column as grid indices, or `None` off the board.
    pub(crate) fn index(self) -> Option<(usize, usize)> {
        if self.in_bounds() {
            Some((self.x as usize, self.y as usize))
        } else {
            None
        }
    }
}

/// Formats one-based, the way players type coordinates.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", i64::from(self.x) + 1, i64::from(self.y) + 1)
    }
}

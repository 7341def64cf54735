//! Vessel definitions.

use crate::coord::Coord;

/// Axis a vessel extends along from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Segments advance along `y` (one row, successive columns).
    Horizontal,
    /// Segments advance along `x` (one column, successive rows).
    Vertical,
}

/// A vessel occupying `length` consecutive cells from `anchor`.
///
/// Bounds are not checked here; the board enforces them on placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    anchor: Coord,
    length: usize,
    orientation: Orientation,
    lives: usize,
}

impl Vessel {
    pub fn new(anchor: Coord, length: usize, orientation: Orientation) -> Self {
        Self {
            anchor,
            length,
            orientation,
            lives: length,
        }
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn lives(&self) -> usize {
        self.lives
    }

    pub fn is_destroyed(&self) -> bool {
        self.lives == 0
    }

    /// Occupied cells, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let Self {
            anchor,
            orientation,
            ..
        } = *self;
        (0..self.length as i32).map(move |i| match orientation {
            Orientation::Horizontal => anchor.offset(0, i),
            Orientation::Vertical => anchor.offset(i, 0),
        })
    }

    /// `true` when a shot at `coord` would strike this vessel.
    /// Hit points are left alone; the board owns that bookkeeping.
    pub fn register_hit(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    pub(crate) fn take_hit(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }
}

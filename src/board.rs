//! Board state: vessel placement, the busy set and shot resolution.
//!
//! The busy set serves two phases. While the fleet is being placed it holds
//! every vessel cell plus the one-cell buffer ring around each vessel, which
//! is what keeps vessels from touching. [`Board::reset_busy`] then empties it
//! once, and from there on it holds the cells that can no longer be shot at.

use alloc::vec::Vec;
use log::{debug, trace};

use crate::bitboard::BitBoard;
use crate::common::{PlacementError, ShotError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::vessel::Vessel;

type BB = BitBoard<u64, BOARD_SIZE>;

/// Logical state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

#[derive(Debug, Clone)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    vessels: Vec<Vessel>,
    busy: BB,
    destroyed: usize,
    hidden: bool,
}

impl Board {
    /// Create an empty, visible board.
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            vessels: Vec::new(),
            busy: BB::new(),
            destroyed: 0,
            hidden: false,
        }
    }

    /// `true` when `coord` lies outside the board.
    pub fn out(&self, coord: Coord) -> bool {
        !coord.in_bounds()
    }

    /// State of the cell at `coord`, or `None` off the board.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        coord.index().map(|(r, c)| self.grid[r][c])
    }

    pub fn is_busy(&self, coord: Coord) -> bool {
        self.busy.contains(coord)
    }

    /// Snapshot of the busy set.
    pub fn busy(&self) -> BB {
        self.busy
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels sunk so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Returns `true` once every placed vessel has been destroyed.
    pub fn all_destroyed(&self) -> bool {
        !self.vessels.is_empty() && self.destroyed == self.vessels.len()
    }

    /// Whether vessel cells are concealed when the board is drawn.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Place `vessel`, reserving its cells and the ring of cells around it.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), PlacementError> {
        for c in vessel.cells() {
            if self.out(c) {
                return Err(PlacementError::OutOfBounds);
            }
            if self.busy.contains(c) {
                return Err(PlacementError::Overlap);
            }
        }
        for c in vessel.cells() {
            if let Some((r, col)) = c.index() {
                self.grid[r][col] = Cell::Ship;
            }
            let _ = self.busy.insert(c);
        }
        self.vessels.push(vessel);
        self.contour(&vessel, false);
        trace!(
            "placed vessel of length {} at {:?} {:?}",
            vessel.length(),
            vessel.anchor(),
            vessel.orientation()
        );
        Ok(())
    }

    /// Forget the placement-time reservations before play begins.
    /// Cell states and vessels are kept.
    pub fn reset_busy(&mut self) {
        self.busy.clear();
    }

    /// Fire at `coord`.
    pub fn resolve_shot(&mut self, coord: Coord) -> Result<ShotOutcome, ShotError> {
        let Some((r, c)) = coord.index() else {
            return Err(ShotError::OutOfRange);
        };
        if self.busy.contains(coord) {
            return Err(ShotError::AlreadyTargeted);
        }
        let _ = self.busy.insert(coord);

        let Some(idx) = self.vessels.iter().position(|v| v.register_hit(coord)) else {
            self.grid[r][c] = Cell::Miss;
            trace!("shot at {:?} missed", coord);
            return Ok(ShotOutcome::Miss);
        };

        self.grid[r][c] = Cell::Hit;
        let vessel = &mut self.vessels[idx];
        vessel.take_hit();
        if vessel.is_destroyed() {
            let sunk = *vessel;
            self.destroyed += 1;
            self.contour(&sunk, true);
            debug!(
                "vessel at {:?} destroyed, {} of {} down",
                sunk.anchor(),
                self.destroyed,
                self.vessels.len()
            );
            Ok(ShotOutcome::Destroyed)
        } else {
            trace!("shot at {:?} hit, {} lives left", coord, vessel.lives());
            Ok(ShotOutcome::Hit)
        }
    }

    /// Reserve the in-bounds ring around `vessel`; with `mark`, draw the
    /// newly reserved cells as misses.
    fn contour(&mut self, vessel: &Vessel, mark: bool) {
        for cell in vessel.cells() {
            for n in cell.neighbours() {
                let Some((r, c)) = n.index() else { continue };
                if self.busy.contains(n) {
                    continue;
                }
                if mark {
                    self.grid[r][c] = Cell::Miss;
                }
                let _ = self.busy.insert(n);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

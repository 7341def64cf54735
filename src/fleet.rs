//! Random fleet generation.

use log::{debug, trace};
use rand::Rng;

use crate::board::Board;
use crate::common::FleetError;
use crate::config::{BOARD_SIZE, FLEET, PLACEMENT_ATTEMPTS};
use crate::coord::Coord;
use crate::vessel::{Orientation, Vessel};

/// Propose a vessel of `length` at a random anchor and orientation.
///
/// Anchors range over `0..=BOARD_SIZE`, one past the last cell, so some
/// proposals are rejected as out of bounds.
pub fn random_vessel<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vessel {
    let x = rng.random_range(0..=BOARD_SIZE as i32);
    let y = rng.random_range(0..=BOARD_SIZE as i32);
    let orientation = if rng.random() {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    Vessel::new(Coord::new(x, y), length, orientation)
}

/// Try once to place vessels of the given `lengths`, in order, on a fresh
/// board, sharing a budget of [`PLACEMENT_ATTEMPTS`] across the fleet.
///
/// On success the busy set has been reset and the board is ready for play.
pub fn generate_board<R: Rng + ?Sized>(
    rng: &mut R,
    lengths: &[usize],
) -> Result<Board, FleetError> {
    let mut board = Board::new();
    let mut attempts = 0;
    for (placed, &len) in lengths.iter().enumerate() {
        loop {
            attempts += 1;
            if attempts > PLACEMENT_ATTEMPTS {
                return Err(FleetError::AttemptsExhausted {
                    placed,
                    attempts: PLACEMENT_ATTEMPTS,
                });
            }
            match board.place_vessel(random_vessel(rng, len)) {
                Ok(()) => break,
                Err(e) => trace!("placement attempt {} rejected: {}", attempts, e),
            }
        }
    }
    board.reset_busy();
    debug!(
        "placed {} vessels in {} attempts",
        lengths.len(),
        attempts
    );
    Ok(board)
}

/// Generate a board with the standard fleet, starting over from an empty
/// board every time the attempt budget runs out.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    loop {
        match generate_board(rng, &FLEET) {
            Ok(board) => return board,
            Err(e) => debug!("{}; regenerating fleet", e),
        }
    }
}

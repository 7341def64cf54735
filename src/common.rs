//! Common types for sea battle: shot outcomes and the error taxonomy.

use core::fmt;

/// Result of a legal shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot struck a vessel that is still afloat.
    Hit,
    /// Shot struck the last live segment of a vessel.
    Destroyed,
}

impl ShotOutcome {
    /// Only a hit that leaves the vessel afloat lets the shooter fire again.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// Reasons a vessel cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A segment would lie off the board.
    OutOfBounds,
    /// A segment lands on another vessel or inside its buffer ring.
    Overlap,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Vessel does not fit on the board"),
            PlacementError::Overlap => write!(f, "Vessel touches or overlaps another vessel"),
        }
    }
}

/// Reasons a shot is rejected. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    OutOfRange,
    AlreadyTargeted,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfRange => write!(f, "You are trying to shoot off the board!"),
            ShotError::AlreadyTargeted => write!(f, "You have already shot at this cell"),
        }
    }
}

/// Random fleet generation ran out of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    AttemptsExhausted { placed: usize, attempts: usize },
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::AttemptsExhausted { placed, attempts } => write!(
                f,
                "Gave up after {} placement attempts with {} vessels placed",
                attempts, placed
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
#[cfg(feature = "std")]
impl std::error::Error for FleetError {}

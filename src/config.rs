/// Side length of the square board.
pub const BOARD_SIZE: usize = 6;
/// Number of vessels in the standard fleet.
pub const NUM_SHIPS: usize = 7;
/// Vessel lengths of the standard fleet, in placement order.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of vessel segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed for a whole fleet before generation starts over.
pub const PLACEMENT_ATTEMPTS: usize = 2000;

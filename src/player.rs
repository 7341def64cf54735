use rand::rngs::SmallRng;

use crate::coord::Coord;

/// Interface implemented by the two kinds of combatant.
///
/// A player only proposes targets. Legality is decided by the opponent's
/// board, and a rejected target simply leads to another call.
pub trait Player {
    /// Choose the next coordinate to fire at.
    ///
    /// Errors are reserved for the player being unable to answer at all,
    /// such as its input stream closing.
    fn select_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coord>;
}

use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::player::Player;

/// Computer opponent firing uniformly at random over the whole board.
///
/// Cells already shot at are not excluded; the board rejects them and the
/// turn asks again.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coord> {
        let x = rng.random_range(0..BOARD_SIZE as i32);
        let y = rng.random_range(0..BOARD_SIZE as i32);
        Ok(Coord::new(x, y))
    }
}

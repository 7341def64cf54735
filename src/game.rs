//! Turn sequencing for a two-sided match.

use alloc::boxed::Box;
use log::debug;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::fleet::random_board;
use crate::narrator::Narrator;
use crate::player::Player;

/// One of the two seats in a match. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    FirstSideWon,
    SecondSideWon,
}

impl GameStatus {
    fn won_by(side: Side) -> Self {
        match side {
            Side::First => GameStatus::FirstSideWon,
            Side::Second => GameStatus::SecondSideWon,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::FirstSideWon => Some(Side::First),
            GameStatus::SecondSideWon => Some(Side::Second),
        }
    }
}

/// Who moves after `active` fired with `outcome`.
pub fn next_side(active: Side, outcome: ShotOutcome) -> Side {
    if outcome.grants_extra_turn() {
        active
    } else {
        active.opponent()
    }
}

/// A player together with the board it defends.
///
/// The board under attack is lent in for each turn, never held.
pub struct Combatant {
    player: Box<dyn Player>,
    board: Board,
    shots: usize,
}

impl Combatant {
    pub fn new(player: Box<dyn Player>, board: Board) -> Self {
        Self {
            player,
            board,
            shots: 0,
        }
    }

    /// The board this combatant defends.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Legal shots fired so far.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Ask for targets until one is accepted by `enemy`, and return its outcome.
    /// Rejected targets are reported to `narrator` and never end the turn.
    pub fn take_turn(
        &mut self,
        side: Side,
        enemy: &mut Board,
        rng: &mut SmallRng,
        narrator: &mut dyn Narrator,
    ) -> anyhow::Result<ShotOutcome> {
        loop {
            let target = self.player.select_target(rng)?;
            narrator.target_selected(side, target);
            match enemy.resolve_shot(target) {
                Ok(outcome) => {
                    self.shots += 1;
                    narrator.shot_resolved(side, target, outcome);
                    return Ok(outcome);
                }
                Err(e) => narrator.shot_rejected(side, target, e),
            }
        }
    }
}

/// Final tally of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSummary {
    pub winner: Side,
    pub turns: usize,
    pub shots: [usize; 2],
}

/// A match between two combatants.
pub struct Game {
    combatants: [Combatant; 2],
    active: Side,
    status: GameStatus,
    turns: usize,
    rng: SmallRng,
}

impl Game {
    pub fn new(first: Combatant, second: Combatant, rng: SmallRng) -> Self {
        Self {
            combatants: [first, second],
            active: Side::First,
            status: GameStatus::InProgress,
            turns: 0,
            rng,
        }
    }

    /// Match on freshly generated standard fleets. The second side's board
    /// is concealed.
    pub fn standard(first: Box<dyn Player>, second: Box<dyn Player>, mut rng: SmallRng) -> Self {
        let first_board = random_board(&mut rng);
        let mut second_board = random_board(&mut rng);
        second_board.set_hidden(true);
        Self::new(
            Combatant::new(first, first_board),
            Combatant::new(second, second_board),
            rng,
        )
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side due to fire next.
    pub fn active(&self) -> Side {
        self.active
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn board(&self, side: Side) -> &Board {
        self.combatant(side).board()
    }

    /// Legal shots fired by both sides.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Play one legal shot for the active side and update the status.
    pub fn step(&mut self, narrator: &mut dyn Narrator) -> anyhow::Result<ShotOutcome> {
        if let Some(winner) = self.status.winner() {
            anyhow::bail!("match already won by {:?}", winner);
        }
        let active = self.active;
        let [first, second] = &mut self.combatants;
        narrator.turn_started(active, &first.board, &second.board);
        let (shooter, defender) = match active {
            Side::First => (first, second),
            Side::Second => (second, first),
        };

        let outcome = shooter.take_turn(active, &mut defender.board, &mut self.rng, narrator)?;
        self.turns += 1;

        if defender.board.all_destroyed() {
            self.status = GameStatus::won_by(active);
            debug!("{:?} side wins after {} shots", active, self.turns);
            narrator.match_finished(active);
        } else {
            self.active = next_side(active, outcome);
            debug!("{:?} -> {:?}, next: {:?}", active, outcome, self.active);
        }
        Ok(outcome)
    }

    /// Run the match to the end and return the winner.
    pub fn play(&mut self, narrator: &mut dyn Narrator) -> anyhow::Result<Side> {
        if self.status == GameStatus::InProgress && self.turns == 0 {
            narrator.match_started();
        }
        loop {
            if let Some(winner) = self.status.winner() {
                return Ok(winner);
            }
            self.step(narrator)?;
        }
    }

    /// Summary of the match, once it has a winner.
    pub fn summary(&self) -> Option<GameSummary> {
        let winner = self.status.winner()?;
        Some(GameSummary {
            winner,
            turns: self.turns,
            shots: [self.combatants[0].shots(), self.combatants[1].shots()],
        })
    }
}

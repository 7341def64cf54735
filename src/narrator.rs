//! Observers of match events.

use crate::board::Board;
use crate::common::{ShotError, ShotOutcome};
use crate::coord::Coord;
use crate::game::Side;

/// Receives notifications as a match progresses. Every method defaults to
/// doing nothing.
pub trait Narrator {
    /// Before the first turn.
    fn match_started(&mut self) {}

    /// Before `side` fires, with both boards as they stand.
    fn turn_started(&mut self, _side: Side, _first: &Board, _second: &Board) {}

    /// `side` proposed `target`; it may still be rejected.
    fn target_selected(&mut self, _side: Side, _target: Coord) {}

    fn shot_resolved(&mut self, _side: Side, _target: Coord, _outcome: ShotOutcome) {}

    fn shot_rejected(&mut self, _side: Side, _target: Coord, _error: ShotError) {}

    fn match_finished(&mut self, _winner: Side) {}
}

/// [`Narrator`] that ignores everything.
#[derive(Debug, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {}

#[cfg(feature = "std")]
pub use console::ConsoleNarrator;

#[cfg(feature = "std")]
mod console {
    use std::io::{self, Stdout, Write};

    use super::Narrator;
    use crate::board::Board;
    use crate::common::{ShotError, ShotOutcome};
    use crate::coord::Coord;
    use crate::game::Side;

    const RULE: &str = "~~~~~~~~~~~~~~~~~~~~";

    const BANNER: &str = "\
Welcome to Sea Battle.
The rules are well known, but here they are once more:
1. Both your board and your opponent's are laid out at random;
2. You cannot shoot at the same cell twice;
3. You cannot shoot next to a destroyed ship;
4. You cannot shoot outside the board.
Good luck, may the luckier one win!";

    /// Narrates a match as text.
    ///
    /// With a human side set, messages are addressed to that player and the
    /// other side is called the opponent. Without one, both sides are named
    /// by seat. Write errors are ignored; narration is best effort.
    pub struct ConsoleNarrator<W> {
        out: W,
        human: Option<Side>,
    }

    impl ConsoleNarrator<Stdout> {
        pub fn stdout(human: Option<Side>) -> Self {
            Self::new(io::stdout(), human)
        }
    }

    impl<W: Write> ConsoleNarrator<W> {
        pub fn new(out: W, human: Option<Side>) -> Self {
            Self { out, human }
        }

        pub fn into_inner(self) -> W {
            self.out
        }

        fn board_title(&self, side: Side) -> &'static str {
            match (self.human, side) {
                (Some(h), s) if h == s => "Your board:",
                (Some(_), _) => "Opponent's board:",
                (None, Side::First) => "First player's board:",
                (None, Side::Second) => "Second player's board:",
            }
        }
    }

    impl<W: Write> Narrator for ConsoleNarrator<W> {
        fn match_started(&mut self) {
            let _ = writeln!(self.out, "{}", BANNER);
        }

        fn turn_started(&mut self, side: Side, first: &Board, second: &Board) {
            // The human's own board is shown first.
            let order = match self.human {
                Some(Side::Second) => [(Side::Second, second), (Side::First, first)],
                _ => [(Side::First, first), (Side::Second, second)],
            };
            for (s, board) in order {
                let title = self.board_title(s);
                let _ = writeln!(self.out, "{}\n{}\n{}", RULE, title, board);
            }
            let whose = match (self.human, side) {
                (Some(h), s) if h == s => "Your turn!",
                (Some(_), _) => "Opponent's turn!",
                (None, Side::First) => "First player's turn!",
                (None, Side::Second) => "Second player's turn!",
            };
            let _ = writeln!(self.out, "{}\n{}", RULE, whose);
        }

        fn target_selected(&mut self, side: Side, target: Coord) {
            // The human typed the target; echo everyone else's.
            let who = match (self.human, side) {
                (Some(h), s) if h == s => return,
                (Some(_), _) => "Opponent's",
                (None, Side::First) => "First player's",
                (None, Side::Second) => "Second player's",
            };
            let _ = writeln!(self.out, "{} move: {}", who, target);
        }

        fn shot_resolved(&mut self, _side: Side, _target: Coord, outcome: ShotOutcome) {
            let msg = match outcome {
                ShotOutcome::Destroyed => "Ship destroyed!",
                ShotOutcome::Hit => "Ship hit!",
                ShotOutcome::Miss => "Miss!",
            };
            let _ = writeln!(self.out, "{}", msg);
        }

        fn shot_rejected(&mut self, _side: Side, _target: Coord, error: ShotError) {
            let _ = writeln!(self.out, "{}", error);
        }

        fn match_finished(&mut self, winner: Side) {
            let msg = match (self.human, winner) {
                (Some(h), w) if h == w => "You won!!!",
                (Some(_), _) => "Unfortunately, the computer was luckier than you!!!",
                (None, Side::First) => "First player wins!",
                (None, Side::Second) => "Second player wins!",
            };
            let _ = writeln!(self.out, "{}\n{}", RULE, msg);
        }
    }
}

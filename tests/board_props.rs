use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::{
    random_board, Board, Cell, Coord, Orientation, PlacementError, ShotError, ShotOutcome, Vessel,
    BOARD_SIZE, NUM_SHIPS, TOTAL_SHIP_CELLS,
};

fn orientation(vertical: bool) -> Orientation {
    if vertical {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

fn fits(v: &Vessel) -> bool {
    v.cells().all(|c| c.in_bounds())
}

fn touches(a: &Vessel, b: &Vessel) -> bool {
    a.cells()
        .any(|p| b.cells().any(|q| (p.x - q.x).abs() <= 1 && (p.y - q.y).abs() <= 1))
}

fn all_cells() -> Vec<Coord> {
    let n = BOARD_SIZE as i32;
    (0..n).flat_map(|x| (0..n).map(move |y| Coord::new(x, y))).collect()
}

fn live_segments(board: &Board) -> usize {
    board.vessels().iter().map(|v| v.lives()).sum()
}

fn vessel() -> impl Strategy<Value = Vessel> {
    let n = BOARD_SIZE as i32;
    (0..n, 0..n, 1..=3usize, any::<bool>())
        .prop_map(|(x, y, len, v)| Vessel::new(Coord::new(x, y), len, orientation(v)))
}

/// Board after a few random legal and illegal shots.
fn played_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = random_board(&mut rng);
    let shots = rng.random_range(0..BOARD_SIZE * BOARD_SIZE);
    for _ in 0..shots {
        let x = rng.random_range(0..BOARD_SIZE as i32);
        let y = rng.random_range(0..BOARD_SIZE as i32);
        let _ = board.resolve_shot(Coord::new(x, y));
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn in_bounds_placement_on_empty_board_succeeds(v in vessel()) {
        prop_assume!(fits(&v));
        let mut board = Board::new();
        prop_assert_eq!(board.place_vessel(v), Ok(()));
        for c in v.cells() {
            prop_assert_eq!(board.cell(c), Some(Cell::Ship));
            prop_assert!(board.is_busy(c));
        }
    }

    #[test]
    fn out_of_bounds_placement_fails(v in vessel()) {
        prop_assume!(!fits(&v));
        let mut board = Board::new();
        prop_assert_eq!(board.place_vessel(v), Err(PlacementError::OutOfBounds));
        prop_assert!(board.vessels().is_empty());
    }

    #[test]
    fn touching_vessels_overlap(a in vessel(), b in vessel()) {
        prop_assume!(fits(&a) && fits(&b));
        let mut board = Board::new();
        board.place_vessel(a).unwrap();
        let res = board.place_vessel(b);
        if touches(&a, &b) {
            prop_assert_eq!(res, Err(PlacementError::Overlap));
        } else {
            prop_assert_eq!(res, Ok(()));
        }
    }

    #[test]
    fn shots_off_the_board_are_out_of_range(seed in any::<u64>(), x in -20i32..26, y in -20i32..26) {
        let target = Coord::new(x, y);
        prop_assume!(!target.in_bounds());
        let mut board = played_board(seed);
        let busy = board.busy();
        prop_assert_eq!(board.resolve_shot(target), Err(ShotError::OutOfRange));
        prop_assert_eq!(board.busy(), busy);
    }

    #[test]
    fn shot_idempotent(seed in any::<u64>(), x in 0..BOARD_SIZE as i32, y in 0..BOARD_SIZE as i32) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng);
        let target = Coord::new(x, y);
        prop_assert!(board.resolve_shot(target).is_ok());
        let destroyed = board.destroyed_count();
        prop_assert_eq!(board.resolve_shot(target), Err(ShotError::AlreadyTargeted));
        prop_assert_eq!(board.destroyed_count(), destroyed);
    }

    #[test]
    fn fleet_falls_after_exactly_every_segment_is_hit(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng);
        let mut targets = all_cells();
        targets.shuffle(&mut rng);

        let mut hits = 0;
        for target in targets {
            let lives_before = live_segments(&board);
            let destroyed_before = board.destroyed_count();
            match board.resolve_shot(target) {
                Ok(ShotOutcome::Miss) => {
                    prop_assert_eq!(live_segments(&board), lives_before);
                    prop_assert_eq!(board.destroyed_count(), destroyed_before);
                }
                Ok(ShotOutcome::Hit) => {
                    hits += 1;
                    prop_assert_eq!(live_segments(&board), lives_before - 1);
                    prop_assert_eq!(board.destroyed_count(), destroyed_before);
                }
                Ok(ShotOutcome::Destroyed) => {
                    hits += 1;
                    prop_assert_eq!(live_segments(&board), lives_before - 1);
                    prop_assert_eq!(board.destroyed_count(), destroyed_before + 1);
                }
                Err(e) => prop_assert_eq!(e, ShotError::AlreadyTargeted),
            }
            prop_assert_eq!(board.destroyed_count() == NUM_SHIPS, hits == TOTAL_SHIP_CELLS);
        }
        prop_assert_eq!(hits, TOTAL_SHIP_CELLS);
        prop_assert!(board.all_destroyed());
    }
}

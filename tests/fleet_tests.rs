use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    generate_board, random_board, random_vessel, Cell, Coord, FleetError, BOARD_SIZE, FLEET,
    PLACEMENT_ATTEMPTS, TOTAL_SHIP_CELLS,
};

fn ship_cells(board: &seabattle::Board) -> usize {
    let n = BOARD_SIZE as i32;
    (0..n)
        .flat_map(|x| (0..n).map(move |y| Coord::new(x, y)))
        .filter(|&c| board.cell(c) == Some(Cell::Ship))
        .count()
}

#[test]
fn test_standard_fleet_is_placed_apart() {
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = random_board(&mut rng);

        let lengths: Vec<usize> = board.vessels().iter().map(|v| v.length()).collect();
        assert_eq!(lengths, FLEET.to_vec());
        assert_eq!(ship_cells(&board), TOTAL_SHIP_CELLS);
        assert!(board.busy().is_empty(), "busy set must be reset for play");
        assert_eq!(board.destroyed_count(), 0);

        let vessels = board.vessels();
        for (i, a) in vessels.iter().enumerate() {
            assert!(a.cells().all(|c| c.in_bounds()));
            for b in &vessels[i + 1..] {
                let touching = a.cells().any(|p| {
                    b.cells()
                        .any(|q| (p.x - q.x).abs() <= 1 && (p.y - q.y).abs() <= 1)
                });
                assert!(!touching, "seed {}: {:?} touches {:?}", seed, a, b);
            }
        }
    }
}

#[test]
fn test_same_seed_same_fleet() {
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    let b1 = random_board(&mut rng1);
    let b2 = random_board(&mut rng2);
    assert_eq!(b1.vessels(), b2.vessels());
}

#[test]
fn test_impossible_fleet_exhausts_budget() {
    let mut rng = SmallRng::seed_from_u64(7);
    match generate_board(&mut rng, &[3; 20]) {
        Err(FleetError::AttemptsExhausted { placed, attempts }) => {
            assert_eq!(attempts, PLACEMENT_ATTEMPTS);
            assert!(placed < 20);
        }
        Ok(_) => panic!("twenty cruisers cannot fit on a 6x6 board"),
    }
}

#[test]
fn test_random_vessel_anchor_range() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut saw_edge = false;
    for _ in 0..500 {
        let v = random_vessel(&mut rng, 2);
        let a = v.anchor();
        assert!((0..=BOARD_SIZE as i32).contains(&a.x));
        assert!((0..=BOARD_SIZE as i32).contains(&a.y));
        assert_eq!(v.length(), 2);
        saw_edge |= a.x == BOARD_SIZE as i32 || a.y == BOARD_SIZE as i32;
    }
    assert!(saw_edge);
}

use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use salvo::{
    place_fleet, Board, BoardError, BoardState, Dimensions, Fleet, Orientation, PlacementConfig,
    Point,
};

fn standard_fleet() -> Fleet {
    Fleet::standard(Dimensions::new(10, 10).unwrap()).unwrap()
}

/// Board with a few of its ships placed and some shots fired.
fn random_board<'a>(fleet: &'a Fleet, seed: u64) -> Board<'a> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(fleet);
    for id in 0..fleet.len() {
        if rng.random_bool(0.6) {
            let p = fleet.dims().random_point(&mut rng);
            let o = if rng.random() { Orientation::Horizontal } else { Orientation::Vertical };
            let _ = board.place_ship(p, id, o);
        }
    }
    for _ in 0..rng.random_range(0..20) {
        let _ = board.attack(fleet.dims().random_point(&mut rng));
    }
    board
}

fn orientation(vertical: bool) -> Orientation {
    if vertical {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn place_unplace_roundtrip(
        seed in any::<u64>(),
        row in -1..11i32,
        col in -1..11i32,
        id in 0..5usize,
        vertical in any::<bool>(),
    ) {
        let fleet = standard_fleet();
        let mut board = random_board(&fleet, seed);
        let before = BoardState::from(&board);
        let origin = Point::new(row, col);
        match board.place_ship(origin, id, orientation(vertical)) {
            Ok(()) => {
                prop_assert_ne!(BoardState::from(&board), before);
                prop_assert_eq!(board.unplace_ship(origin, id, orientation(vertical)), Ok(()));
            }
            Err(_) => {}
        }
        prop_assert_eq!(BoardState::from(&board), before);
    }

    #[test]
    fn attack_accepted_only_once(seed in any::<u64>(), row in 0..10i32, col in 0..10i32) {
        let fleet = standard_fleet();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(&fleet);
        place_fleet(&mut board, &mut rng, PlacementConfig::default()).unwrap();

        let p = Point::new(row, col);
        let before = BoardState::from(&board);
        prop_assert!(board.attack(p).is_ok());
        let after = BoardState::from(&board);
        prop_assert_ne!(before, after);
        prop_assert_eq!(board.attack(p), Err(BoardError::AlreadyAttacked(p)));
        prop_assert_eq!(BoardState::from(&board), after);
    }

    #[test]
    fn block_unblock_restores_board(seed in any::<u64>(), probability in 0.0..=1.0f64) {
        let fleet = standard_fleet();
        let mut board = random_board(&fleet, seed);
        let before = BoardState::from(&board);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5a5a);
        board.block_with(&mut rng, probability);
        board.unblock();
        prop_assert_eq!(BoardState::from(&board), before);
    }

    #[test]
    fn clear_destroys_everything(seed in any::<u64>()) {
        let fleet = standard_fleet();
        let mut board = random_board(&fleet, seed);
        board.clear();
        prop_assert!(board.all_ships_destroyed());
        prop_assert_eq!(BoardState::from(&board), BoardState::from(&Board::new(&fleet)));
    }
}

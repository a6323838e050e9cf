use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{Anchor, AttackResult, Dimensions, HuntTarget, Mode, Point};

fn ten_by_ten(anchor: Anchor) -> HuntTarget {
    HuntTarget::new(Dimensions::new(10, 10).unwrap(), anchor)
}

#[test]
fn test_searching_never_repeats() {
    let mut hunt = HuntTarget::new(Dimensions::new(3, 3).unwrap(), Anchor::FirstHit);
    let mut rng = SmallRng::seed_from_u64(21);
    let mut seen = Vec::new();
    for _ in 0..9 {
        let p = hunt.recommend(&mut rng).unwrap();
        assert!(p.row >= 0 && p.row < 3 && p.col >= 0 && p.col < 3);
        assert!(!seen.contains(&p), "{} fired twice", p);
        hunt.record(p, Some(AttackResult::Miss));
        seen.push(p);
    }
    assert_eq!(hunt.remaining(), 0);
    assert_eq!(hunt.recommend(&mut rng), None);
}

#[test]
fn test_sweep_walks_row_then_column() {
    let mut hunt = ten_by_ten(Anchor::FirstHit);
    let mut rng = SmallRng::seed_from_u64(0);
    let anchor = Point::new(5, 5);
    hunt.record(anchor, Some(AttackResult::Hit(0)));
    assert_eq!(hunt.mode(), Mode::Exploiting { anchor });

    let expected = [
        (5, 9), (5, 8), (5, 7), (5, 6), (5, 4), (5, 3), (5, 2), (5, 1),
        (9, 5), (8, 5), (7, 5), (6, 5), (4, 5), (3, 5), (2, 5), (1, 5),
    ];
    for (row, col) in expected {
        assert_eq!(hunt.recommend(&mut rng), Some(Point::new(row, col)));
        assert_eq!(hunt.mode(), Mode::Exploiting { anchor });
    }

    // Neighbourhood exhausted: back to random search.
    let p = hunt.recommend(&mut rng).unwrap();
    assert_eq!(hunt.mode(), Mode::Searching);
    assert!(!expected.contains(&(p.row, p.col)));
    assert_ne!(p, anchor);
}

#[test]
fn test_sweep_skips_off_board_offsets() {
    let mut hunt = ten_by_ten(Anchor::FirstHit);
    let mut rng = SmallRng::seed_from_u64(0);
    hunt.record(Point::new(0, 0), Some(AttackResult::Hit(2)));

    let shots: Vec<_> = (0..8).map(|_| hunt.recommend(&mut rng).unwrap()).collect();
    assert_eq!(
        shots,
        vec![
            Point::new(0, 4),
            Point::new(0, 3),
            Point::new(0, 2),
            Point::new(0, 1),
            Point::new(4, 0),
            Point::new(3, 0),
            Point::new(2, 0),
            Point::new(1, 0),
        ]
    );
}

#[test]
fn test_sweep_skips_cells_already_fired_at() {
    let mut hunt = ten_by_ten(Anchor::FirstHit);
    let mut rng = SmallRng::seed_from_u64(0);
    hunt.record(Point::new(5, 9), Some(AttackResult::Miss));
    hunt.record(Point::new(5, 8), Some(AttackResult::Miss));
    hunt.record(Point::new(5, 5), Some(AttackResult::Hit(1)));
    assert_eq!(hunt.recommend(&mut rng), Some(Point::new(5, 7)));
}

#[test]
fn test_sunk_returns_to_searching() {
    let mut hunt = ten_by_ten(Anchor::FirstHit);
    hunt.record(Point::new(2, 2), Some(AttackResult::Hit(4)));
    hunt.record(Point::new(2, 3), Some(AttackResult::Sunk(4)));
    assert_eq!(hunt.mode(), Mode::Searching);
}

#[test]
fn test_first_hit_anchor_stays_put() {
    let mut hunt = ten_by_ten(Anchor::FirstHit);
    let anchor = Point::new(5, 5);
    hunt.record(anchor, Some(AttackResult::Hit(0)));
    hunt.record(Point::new(5, 9), Some(AttackResult::Hit(1)));
    hunt.record(Point::new(5, 8), Some(AttackResult::Miss));
    assert_eq!(hunt.mode(), Mode::Exploiting { anchor });
}

#[test]
fn test_latest_hit_anchor_follows_hits() {
    let mut hunt = ten_by_ten(Anchor::LatestHit);
    hunt.record(Point::new(5, 5), Some(AttackResult::Hit(0)));
    hunt.record(Point::new(5, 9), Some(AttackResult::Hit(1)));
    assert_eq!(hunt.mode(), Mode::Exploiting { anchor: Point::new(5, 9) });
    hunt.record(Point::new(5, 8), Some(AttackResult::Miss));
    assert_eq!(hunt.mode(), Mode::Exploiting { anchor: Point::new(5, 9) });
}

#[test]
fn test_first_hit_exploits_around_a_sinking_shot() {
    let mut hunt = ten_by_ten(Anchor::FirstHit);
    let mut rng = SmallRng::seed_from_u64(0);
    let p = Point::new(5, 5);
    hunt.record(p, Some(AttackResult::Sunk(2)));
    assert_eq!(hunt.mode(), Mode::Exploiting { anchor: p });
    assert_eq!(hunt.recommend(&mut rng), Some(Point::new(5, 9)));
}

#[test]
fn test_latest_hit_keeps_searching_after_a_sinking_shot() {
    let mut hunt = ten_by_ten(Anchor::LatestHit);
    hunt.record(Point::new(3, 3), Some(AttackResult::Sunk(0)));
    assert_eq!(hunt.mode(), Mode::Searching);
    assert!(hunt.is_targeted(Point::new(3, 3)));
}

#[test]
fn test_rejected_shots_leave_mode_alone() {
    let mut hunt = ten_by_ten(Anchor::FirstHit);
    hunt.record(Point::new(1, 1), None);
    assert_eq!(hunt.mode(), Mode::Searching);
    assert!(hunt.is_targeted(Point::new(1, 1)));

    hunt.record(Point::new(4, 4), Some(AttackResult::Hit(0)));
    hunt.record(Point::new(4, 8), None);
    assert_eq!(hunt.mode(), Mode::Exploiting { anchor: Point::new(4, 4) });

    // off-board points are ignored
    let before = hunt.remaining();
    hunt.record(Point::new(-1, 4), None);
    assert_eq!(hunt.remaining(), before);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn exploit_shots_stay_near_anchor(
        seed in any::<u64>(),
        row in 0..10i32,
        col in 0..10i32,
        latest in any::<bool>(),
    ) {
        let anchor_kind = if latest { Anchor::LatestHit } else { Anchor::FirstHit };
        let mut hunt = ten_by_ten(anchor_kind);
        let mut rng = SmallRng::seed_from_u64(seed);
        let anchor = Point::new(row, col);
        hunt.record(anchor, Some(AttackResult::Hit(0)));

        loop {
            let p = hunt.recommend(&mut rng).unwrap();
            if hunt.mode() == Mode::Searching {
                break;
            }
            let same_row = p.row == anchor.row && (p.col - anchor.col).abs() <= 4;
            let same_col = p.col == anchor.col && (p.row - anchor.row).abs() <= 4;
            prop_assert!(same_row || same_col, "{} strays from {}", p, anchor);
            prop_assert_ne!(p, anchor);
            hunt.record(p, Some(AttackResult::Miss));
        }
    }
}

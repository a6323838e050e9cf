use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{
    create_player, AwfulPlayer, Board, BoardError, Cell, ConsoleObserver, Dimensions, Fleet,
    HumanPlayer, Player, PlayerKind, Point,
};

fn standard() -> Fleet {
    Fleet::standard(Dimensions::new(10, 10).unwrap()).unwrap()
}

fn patrol_fleet() -> Fleet {
    let mut fleet = Fleet::new(Dimensions::new(5, 5).unwrap());
    fleet.add_ship(2, 'P', "patrol boat").unwrap();
    fleet
}

#[test]
fn test_awful_stacks_ships_in_first_column() {
    let fleet = standard();
    let mut player = AwfulPlayer::new("awful", &fleet);
    let mut board = Board::new(&fleet);
    let mut rng = SmallRng::seed_from_u64(0);
    player.place_ships(&mut rng, &mut board).unwrap();

    for (id, def) in fleet.iter() {
        let row = id as i32;
        for col in 0..def.length() {
            assert_eq!(board.cell(Point::new(row, col)), Some(Cell::Occupied(id)));
        }
        assert_eq!(board.cell(Point::new(row, def.length())), Some(Cell::Empty));
    }
}

#[test]
fn test_awful_fires_backward_and_wraps() {
    let fleet = standard();
    let mut player = AwfulPlayer::new("awful", &fleet);
    let mut rng = SmallRng::seed_from_u64(0);

    let shots: Vec<_> = (0..101)
        .map(|_| player.recommend_attack(&mut rng).unwrap())
        .collect();
    assert_eq!(shots[0], Point::new(9, 9));
    assert_eq!(shots[1], Point::new(9, 8));
    assert_eq!(shots[2], Point::new(9, 7));
    assert_eq!(shots[10], Point::new(8, 9));
    assert_eq!(shots[99], Point::new(0, 0));
    assert_eq!(shots[100], Point::new(9, 9));
}

#[test]
fn test_human_reprompts_until_valid() {
    let fleet = patrol_fleet();
    let mut board = Board::new(&fleet);
    let mut rng = SmallRng::seed_from_u64(0);
    let input = Cursor::new("x\nh\nfoo\n4 4\n0 0\n2 3\n");
    let mut out = Vec::new();
    {
        let mut human = HumanPlayer::new("Pat", &fleet, input, &mut out);
        assert!(human.is_human());
        human.place_ships(&mut rng, &mut board).unwrap();
        assert_eq!(human.recommend_attack(&mut rng), Some(Point::new(2, 3)));
        assert_eq!(human.recommend_attack(&mut rng), None);
    }

    assert_eq!(board.cell(Point::new(0, 0)), Some(Cell::Occupied(0)));
    assert_eq!(board.cell(Point::new(0, 1)), Some(Cell::Occupied(0)));

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Pat must place 1 ships.\n"));
    assert!(text.contains("Enter h or v for direction of patrol boat (length 2): "));
    assert!(text.contains("Direction must be h or v.\n"));
    assert!(text.contains("Enter row and column of leftmost cell (e.g. 3 5): "));
    assert!(text.contains("You must enter two integers.\n"));
    assert!(text.contains("The ship can not be placed there.\n"));
    assert!(text.contains("Enter the row and column to attack (e.g. 3 5): "));
}

#[test]
fn test_human_vertical_prompt() {
    let fleet = patrol_fleet();
    let mut board = Board::new(&fleet);
    let mut rng = SmallRng::seed_from_u64(0);
    let mut out = Vec::new();
    {
        let mut human = HumanPlayer::new("Pat", &fleet, Cursor::new("v\n3 4\n"), &mut out);
        human.place_ships(&mut rng, &mut board).unwrap();
    }
    assert_eq!(board.cell(Point::new(4, 4)), Some(Cell::Occupied(0)));
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Enter row and column of topmost cell (e.g. 3 5): "));
}

#[test]
fn test_human_running_out_of_input_abandons_placement() {
    let fleet = patrol_fleet();
    let mut board = Board::new(&fleet);
    let mut rng = SmallRng::seed_from_u64(0);
    let mut human = HumanPlayer::new("Pat", &fleet, Cursor::new("h\n"), std::io::sink());
    assert_eq!(
        human.place_ships(&mut rng, &mut board),
        Err(BoardError::PlacementExhausted)
    );
    assert!(!board.is_placed(0));
}

#[test]
fn test_factory_builds_named_players() {
    let fleet = standard();
    for kind in ["awful", "mediocre", "good"] {
        let player = create_player(kind, "Robo", &fleet).unwrap();
        assert_eq!(player.name(), "Robo");
        assert!(!player.is_human());
    }
    let human = create_player("human", "Pat", &fleet).unwrap();
    assert!(human.is_human());
    assert!(create_player("bogus", "Nobody", &fleet).is_none());
}

#[test]
fn test_player_kind_names() {
    for kind in [
        PlayerKind::Human,
        PlayerKind::Awful,
        PlayerKind::Mediocre,
        PlayerKind::Good,
    ] {
        assert_eq!(kind.to_string().parse::<PlayerKind>(), Ok(kind));
    }
    assert!("Good".parse::<PlayerKind>().is_err());
}

#[test]
fn test_human_and_console_share_stdin() {
    let fleet = standard();
    let human = HumanPlayer::stdio("Pat", &fleet);
    let observer = ConsoleObserver::stdio(true);
    let other = create_player("human", "Sam", &fleet).unwrap();
    assert!(human.is_human() && other.is_human());
    drop(observer);
}

use rand::{rngs::SmallRng, SeedableRng};
use salvo::{create_player, Dimensions, Fleet, Game, GameOutcome, PlayerKind, Side, Silent};
use serde::Serialize;

#[derive(Serialize)]
struct SideSummary {
    kind: PlayerKind,
    wins: usize,
    wins_by_forfeit: usize,
}

#[derive(Serialize)]
struct Summary {
    seed: u64,
    games: usize,
    first: SideSummary,
    second: SideSummary,
    no_winner: usize,
    average_half_turns: f64,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 5 {
        let program = args.first().map_or("sim", String::as_str);
        eprintln!("Usage: {} <seed> <games> [first] [second]", program);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;
    let parse_kind = |arg: Option<&String>, default: PlayerKind| -> anyhow::Result<PlayerKind> {
        match arg {
            Some(s) => s.parse().map_err(|e| anyhow::anyhow!("{}: {}", s, e)),
            None => Ok(default),
        }
    };
    let first_kind = parse_kind(args.get(3), PlayerKind::Mediocre)?;
    let second_kind = parse_kind(args.get(4), PlayerKind::Good)?;
    if first_kind == PlayerKind::Human || second_kind == PlayerKind::Human {
        anyhow::bail!("the simulator only runs computer players");
    }

    let fleet = Fleet::standard(Dimensions::new(10, 10)?)?;
    let game = Game::new(&fleet)?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut summary = Summary {
        seed,
        games,
        first: SideSummary { kind: first_kind, wins: 0, wins_by_forfeit: 0 },
        second: SideSummary { kind: second_kind, wins: 0, wins_by_forfeit: 0 },
        no_winner: 0,
        average_half_turns: 0.0,
    };
    let mut total_half_turns = 0usize;
    let mut decided = 0usize;

    for _ in 0..games {
        let mut p1 = create_player(first_kind.as_str(), "first", &fleet)
            .ok_or_else(|| anyhow::anyhow!("cannot create {}", first_kind))?;
        let mut p2 = create_player(second_kind.as_str(), "second", &fleet)
            .ok_or_else(|| anyhow::anyhow!("cannot create {}", second_kind))?;
        match game.play(&mut *p1, &mut *p2, &mut rng, &mut Silent) {
            GameOutcome::Won { winner, half_turns, by_forfeit } => {
                let side = match winner {
                    Side::First => &mut summary.first,
                    Side::Second => &mut summary.second,
                };
                side.wins += 1;
                if by_forfeit {
                    side.wins_by_forfeit += 1;
                }
                total_half_turns += half_turns;
                decided += 1;
            }
            GameOutcome::NoWinner { .. } => summary.no_winner += 1,
        }
    }
    if decided > 0 {
        summary.average_half_turns = total_half_turns as f64 / decided as f64;
    }

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

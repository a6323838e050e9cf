use anyhow::anyhow;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use salvo::{
    create_player, init_logging, place_fleet, Board, ConsoleObserver, Dimensions, Fleet, Game,
    GameOutcome, PlacementConfig, PlayerKind, Side, MAX_COLS, MAX_ROWS,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game between two players, narrated on the console.
    Play {
        #[arg(long, value_enum, default_value_t = PlayerKind::Mediocre)]
        first: PlayerKind,
        #[arg(long, value_enum, default_value_t = PlayerKind::Awful)]
        second: PlayerKind,
        #[arg(long, default_value = "Mimi")]
        first_name: String,
        #[arg(long, default_value = "Shuman")]
        second_name: String,
        #[arg(long, default_value_t = MAX_ROWS as i32)]
        rows: i32,
        #[arg(long, default_value_t = MAX_COLS as i32)]
        cols: i32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Wait for Enter after every shot")]
        pause: bool,
    },
    /// Show the fleet layout the backtracking placement search produces.
    Place {
        #[arg(long, default_value_t = MAX_ROWS as i32)]
        rows: i32,
        #[arg(long, default_value_t = MAX_COLS as i32)]
        cols: i32,
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            first,
            second,
            first_name,
            second_name,
            rows,
            cols,
            seed,
            pause,
        } => {
            let dims = Dimensions::new(rows, cols)?;
            let fleet = Fleet::standard(dims)?;
            let game = Game::new(&fleet)?;
            let mut rng = make_rng(seed);

            let mut p1 = create_player(first.as_str(), &first_name, &fleet)
                .ok_or_else(|| anyhow!("{} players are not available", first))?;
            let mut p2 = create_player(second.as_str(), &second_name, &fleet)
                .ok_or_else(|| anyhow!("{} players are not available", second))?;
            let mut observer = ConsoleObserver::stdio(pause);

            match game.play(&mut *p1, &mut *p2, &mut rng, &mut observer) {
                GameOutcome::Won { half_turns, .. } => {
                    println!("Game over after {} half-turns.", half_turns);
                }
                GameOutcome::NoWinner { side, error } => {
                    let name = match side {
                        Side::First => &first_name,
                        Side::Second => &second_name,
                    };
                    println!("{} could not place their ships ({}). The game has no winner.", name, error);
                }
            }
        }
        Commands::Place { rows, cols, seed } => {
            let dims = Dimensions::new(rows, cols)?;
            let fleet = Fleet::standard(dims)?;
            let mut rng = make_rng(seed);
            let mut board = Board::new(&fleet);
            place_fleet(&mut board, &mut rng, PlacementConfig::default())?;
            print!("{}", board.render(false));
        }
    }
    Ok(())
}

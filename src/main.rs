use std::io::{self, Write};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, ui, AiPlayer, CliPlayer, GameError, Match, MatchConfig, MatchState,
    PlacementConfig, Player, PlayerError, Side,
};

#[derive(Parser)]
#[command(author, version, about = "Sea Battle on a 6x6 grid", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on the console (the default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = PlacementConfig::default().attempts_per_board)]
        placement_attempts: usize,
    },
    /// Watch two computer players fight it out.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
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

    match cli.command.unwrap_or(Commands::Play {
        seed: None,
        placement_attempts: PlacementConfig::default().attempts_per_board,
    }) {
        Commands::Play {
            seed,
            placement_attempts,
        } => {
            let mut rng = make_rng(seed);
            let config = MatchConfig {
                placement: PlacementConfig {
                    attempts_per_board: placement_attempts,
                    ..PlacementConfig::default()
                },
                ..MatchConfig::default()
            };
            let human: Box<dyn Player> = Box::new(CliPlayer::stdio());
            let computer: Box<dyn Player> = Box::new(AiPlayer::new(&mut rng));
            let mut game = Match::new([human, computer], config);

            print!("{}", ui::banner());
            match game.run(&mut rng) {
                Ok(winner) => finish(&game, winner)?,
                Err(GameError::Player(PlayerError::Quit)) => println!("\nGoodbye, admiral."),
                Err(e) => return Err(anyhow::anyhow!(e)),
            }
        }
        Commands::Watch { seed } => {
            let mut rng = make_rng(seed);
            let first: Box<dyn Player> = Box::new(AiPlayer::new(&mut rng));
            let second: Box<dyn Player> = Box::new(AiPlayer::new(&mut rng));
            let mut game = Match::new([first, second], MatchConfig::default());
            game.setup(&mut rng)?;

            while game.state() == MatchState::Playing {
                let record = game.step(&mut rng)?;
                println!(
                    "{:?} fires at {}: {:?}",
                    record.side, record.target, record.result
                );
            }
            if let Some(summary) = game.summary() {
                print!(
                    "{}",
                    ui::render_view(game.board(Side::First), game.board(Side::Second))
                );
                println!(
                    "{} ({:?} side) wins, {} vs {} shots",
                    game.player(summary.winner).name(),
                    summary.winner,
                    summary.shots[0],
                    summary.shots[1]
                );
            }
        }
    }
    Ok(())
}

fn finish(game: &Match, winner: Side) -> anyhow::Result<()> {
    let mut out = io::stdout();
    writeln!(out, "{}", "-".repeat(20))?;
    write!(
        out,
        "{}",
        ui::render_view(game.board(Side::First), game.board(Side::Second))
    )?;
    writeln!(out, "{}", ui::game_over_message(winner))?;
    Ok(())
}

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, AiPlayer, Match, MatchConfig, Player};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let p1: Box<dyn Player> = Box::new(AiPlayer::new(&mut rng));
    let p2: Box<dyn Player> = Box::new(AiPlayer::new(&mut rng));
    let mut game = Match::new([p1, p2], MatchConfig::default());
    game.run(&mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let summary = game
        .summary()
        .ok_or_else(|| anyhow::anyhow!("match ended without a winner"))?;
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, AiPlayer, Game, GameConfig, NullRenderer};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut game = Game::new(
        &GameConfig::default(),
        SmallRng::seed_from_u64(seed),
        Box::new(AiPlayer::new()),
        NullRenderer,
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    let outcome = game.run_loop();

    println!("{}", serde_json::to_string(&outcome)?);
    Ok(())
}

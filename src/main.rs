use std::io;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    cli::{ConsoleRenderer, LineInput},
    init_logging, AiPlayer, Game, GameConfig, HumanPlayer, BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = BOARD_SIZE)]
        size: usize,
        #[arg(long, help = "Show the computer's ships")]
        reveal: bool,
    },
    /// Watch the computer play against itself.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = BOARD_SIZE)]
        size: usize,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, size, reveal } => {
            let config = GameConfig {
                board_size: size,
                reveal_computer_ships: reveal,
            };
            let mut renderer = ConsoleRenderer::new(io::stdout());
            renderer.greet();
            let input = LineInput::new(io::stdin().lock(), io::stdout());
            let mut game = Game::new(
                &config,
                make_rng(seed),
                Box::new(HumanPlayer::new(input)),
                renderer,
            )
            .map_err(|e| anyhow!("cannot start game: {}", e))?;
            game.run_loop();
            println!("Thanks for playing! Come back soon!");
        }
        Commands::Watch { seed, size } => {
            let config = GameConfig {
                board_size: size,
                reveal_computer_ships: true,
            };
            let mut game = Game::new(
                &config,
                make_rng(seed),
                Box::new(AiPlayer::new()),
                ConsoleRenderer::new(io::stdout()),
            )
            .map_err(|e| anyhow!("cannot start game: {}", e))?;
            let outcome = game.run_loop();
            println!("{} side won after {} moves", outcome.winner, outcome.moves);
        }
    }
    Ok(())
}

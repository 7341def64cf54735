use std::io;

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, wait_for_enter, AiPlayer, CliPlayer, ConsoleNarrator, Game, Narrator, Side,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer (the default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play against itself.
    Auto {
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

    match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => {
            let rng = make_rng(seed);
            let mut narrator = ConsoleNarrator::stdout(Some(Side::First));
            narrator.match_started();
            // One lock for the whole match: the pause and the player share it.
            let mut input = io::stdin().lock();
            wait_for_enter(&mut input, &mut io::stdout())?;
            let human = CliPlayer::new(input, io::stdout());
            let mut game = Game::standard(Box::new(human), Box::new(AiPlayer::new()), rng);
            // Banner already shown; `play` would repeat it.
            while game.status().winner().is_none() {
                game.step(&mut narrator)?;
            }
        }
        Commands::Auto { seed } => {
            let rng = make_rng(seed);
            let mut game = Game::standard(Box::new(AiPlayer::new()), Box::new(AiPlayer::new()), rng);
            let mut narrator = ConsoleNarrator::stdout(None);
            game.play(&mut narrator)?;
        }
    }
    Ok(())
}

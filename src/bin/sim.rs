use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{random_board, AiPlayer, Combatant, Game, SilentNarrator};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        let prog = args.first().map_or("sim", String::as_str);
        eprintln!("Usage: {} <seed1> <seed2>", prog);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    // Seed one places the fleets, seed two drives the shooting.
    let mut placement = SmallRng::seed_from_u64(seed1);
    let first = Combatant::new(Box::new(AiPlayer::new()), random_board(&mut placement));
    let second = Combatant::new(Box::new(AiPlayer::new()), random_board(&mut placement));

    let mut game = Game::new(first, second, SmallRng::seed_from_u64(seed2));
    game.play(&mut SilentNarrator)?;
    let summary = game
        .summary()
        .ok_or_else(|| anyhow::anyhow!("match ended without a winner"))?;

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

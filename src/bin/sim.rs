use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use torpedo::{init_logging, play_out, GameConfig, GameSession, GameStatus, SilentPresenter};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let mut session = GameSession::with_seed(GameConfig::default(), seed)?;
    let mut gunner = SmallRng::seed_from_u64(seed.wrapping_add(1));

    let mut won = 0u64;
    let mut lost = 0u64;
    let mut ships_sunk = 0usize;
    let mut shots_fired = 0u64;
    for game in 0..games {
        if game > 0 {
            session.new_game()?;
        }
        match play_out(&mut session, &mut gunner, &mut SilentPresenter) {
            GameStatus::Won => won += 1,
            GameStatus::Lost => lost += 1,
            GameStatus::InProgress => anyhow::bail!("game {} stopped before it ended", game),
        }
        ships_sunk += session.ships_sunk();
        shots_fired += u64::from(session.config().shot_budget() - session.remaining_shots());
    }

    let result = json!({
        "seed": seed,
        "games": games,
        "won": won,
        "lost": lost,
        "ships_sunk": ships_sunk,
        "shots_fired": shots_fired,
        "last_game": session.snapshot(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

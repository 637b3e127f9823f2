#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use torpedo::{
    console, init_logging, play_out, ConsolePresenter, GameConfig, GameSession, Presenter,
    SHOT_BUDGET,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use std::io::Write;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a game on the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = SHOT_BUDGET, help = "Torpedoes per game")]
        shots: u32,
        #[arg(long, help = "Show ship positions while playing")]
        reveal: bool,
    },
    /// Watch the computer fire at random cells until the game ends.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = SHOT_BUDGET, help = "Torpedoes per game")]
        shots: u32,
    },
}

#[cfg(feature = "std")]
fn new_session(config: GameConfig, seed: Option<u64>) -> anyhow::Result<GameSession> {
    let session = match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            GameSession::with_seed(config, s)?
        }
        None => GameSession::new(config)?,
    };
    Ok(session)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            shots,
            reveal,
        } => {
            let config = GameConfig::default().with_shot_budget(shots)?;
            let mut session = new_session(config, seed)?;
            let stdin = std::io::stdin();
            let mut presenter = ConsolePresenter::new(std::io::stdout());
            console::play(&mut session, stdin.lock(), &mut presenter, reveal)?;
        }
        Commands::Auto { seed, shots } => {
            let config = GameConfig::default().with_shot_budget(shots)?;
            let mut session = new_session(config, seed)?;
            let mut gunner = match seed {
                Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let mut presenter = ConsolePresenter::new(std::io::stdout());
            presenter.new_game(&session.snapshot());
            let status = play_out(&mut session, &mut gunner, &mut presenter);

            let out = presenter.writer();
            writeln!(out)?;
            console::print_board(out, session.board(), true)?;
            writeln!(
                out,
                "{:?}: {} of {} ships sunk, {} torpedoes left",
                status,
                session.ships_sunk(),
                session.config().fleet().len(),
                session.remaining_shots()
            )?;
        }
    }
    Ok(())
}

mod arena_config;
mod match_runner;

use clap::Parser;
use tictactoe_engine::config::Validate;
use tictactoe_engine::tictactoe::Difficulty;
use tictactoe_engine::{SessionRng, log, logger};

use arena_config::{ArenaConfig, get_config_manager, get_default_config_path};
use match_runner::run_arena;

#[derive(Parser)]
#[command(
    name = "tictactoe_arena",
    about = "Plays computer-vs-computer tic-tac-toe matches"
)]
struct Args {
    /// YAML config file; a missing file means defaults
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    games: Option<u32>,

    /// Difficulty of the X player (easy, medium, hard)
    #[arg(long = "x")]
    x_difficulty: Option<Difficulty>,

    /// Difficulty of the O player (easy, medium, hard)
    #[arg(long = "o")]
    o_difficulty: Option<Difficulty>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log every game's move list
    #[arg(long)]
    verbose: bool,

    /// Save the effective configuration to the config file and exit
    #[arg(long)]
    write_config: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut ArenaConfig) {
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(difficulty) = self.x_difficulty {
            config.x_difficulty = difficulty;
        }
        if let Some(difficulty) = self.o_difficulty {
            config.o_difficulty = difficulty;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Arena".to_string())
    } else {
        None
    };
    logger::init_logger_with_verbosity(prefix, args.verbose);

    let config_path = args.config.clone().unwrap_or_else(get_default_config_path);
    let config_manager = get_config_manager(&config_path);
    let mut config = config_manager.get_config()?;
    args.apply_overrides(&mut config);
    config.validate()?;

    if args.write_config {
        config_manager.set_config(&config)?;
        log!("Config written to {}", config_path);
        return Ok(());
    }

    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Playing {} games: X={} vs O={} (seed {})",
        config.games,
        config.x_difficulty,
        config.o_difficulty,
        rng.seed()
    );

    let summary = run_arena(
        config.x_difficulty,
        config.o_difficulty,
        config.games,
        &mut rng,
    );

    log!(
        "X wins: {}, O wins: {}, draws: {}, unfinished: {}",
        summary.x_wins,
        summary.o_wins,
        summary.draws,
        summary.unfinished
    );

    Ok(())
}

mod config;
mod input;
mod render;
mod tictactoe_runner;

use std::io;

use clap::{Parser, ValueEnum};
use common::games::SessionRng;
use common::games::tictactoe::FirstPlayerMode;
use common::log;
use common::logger::{self, LogSink};

use config::{CONFIG_FILE, get_config_manager};
use tictactoe_runner::{ConsoleRunner, SessionEnd};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a computer that never loses")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Overrides `game.first_player` from the config file
    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    no_clear: bool,

    /// Seed for the random first-player draw
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective config back to the config file
    #[arg(long)]
    save_config: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstArg {
    Ask,
    Human,
    Computer,
    Random,
}

impl From<FirstArg> for FirstPlayerMode {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Ask => FirstPlayerMode::Ask,
            FirstArg::Human => FirstPlayerMode::Human,
            FirstArg::Computer => FirstPlayerMode::Computer,
            FirstArg::Random => FirstPlayerMode::Random,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;

    if let Some(first) = args.first {
        config.game.first_player = first.into();
    }
    if args.verbose {
        config.logging.enabled = true;
    }
    if args.use_log_prefix {
        config.logging.use_prefix = true;
    }
    if args.no_clear {
        config.display.clear_screen = false;
    }
    if args.save_config {
        config_manager.set_config(&config)?;
    }

    let sink = if config.logging.enabled {
        LogSink::Stderr
    } else {
        LogSink::Silent
    };
    let prefix = config.logging.use_prefix.then(|| "Console".to_string());
    logger::init_logger(prefix, sink);

    log!("Using config {}", args.config);

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let mut runner = ConsoleRunner::new(io::stdin().lock(), io::stdout().lock(), config.display);

    let first_player = match config.game.first_player.resolve(&mut rng) {
        Some(player) => player,
        None => match runner.ask_first_player()? {
            Some(player) => player,
            None => return Ok(()),
        },
    };
    log!("The {} moves first", first_player);

    match runner.run(first_player)? {
        SessionEnd::Finished(outcome) => log!("Game finished: {:?}", outcome),
        SessionEnd::Quit => log!("Player left the game"),
    }

    Ok(())
}

mod config;
mod game_loop;
mod host;
mod input;

use clap::Parser;
use snake_core::config::Validate;
use snake_core::{log, logger, SessionRng};

use config::{get_config_manager, tick_interval, CONFIG_FILE};
use game_loop::run_game_loop;
use host::HostSession;
use input::parse_script;

#[derive(Parser)]
#[command(name = "snake_headless", about = "Runs a scripted snake game without rendering")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Whitespace separated keys (w/a/s/d, arrow names, p, r, .), one per tick
    #[arg(long, default_value = "")]
    script: String,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    ticks_per_second: Option<u32>,

    #[arg(long, default_value_t = 1000)]
    max_ticks: u64,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Headless".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(&args.config).get_config()?;
    if let Some(ticks_per_second) = args.ticks_per_second {
        config.ticks_per_second = ticks_per_second;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    config.validate()?;

    let commands = parse_script(&args.script)?;
    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let interval = tick_interval(config.ticks_per_second);
    let session = HostSession::new(config.game.clone(), rng);
    log!(
        "Starting {}x{} game ({:?}), seed {}, tick interval {}ms",
        config.game.columns,
        config.game.rows,
        config.game.wall_collision_mode,
        session.seed(),
        interval.as_millis()
    );

    let final_state = run_game_loop(session, commands, interval, args.max_ticks).await;
    if final_state.is_game_over() {
        log!("Final score: {}", final_state.score);
    }

    Ok(())
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use isoshooter_app::autopilot::Autopilot;
use isoshooter_app::game_loop::{drive, spawn_game_loop};
use isoshooter_app::init_logging;
use isoshooter_app::state::{AppError, LoopOptions};
use isoshooter_core::config::GameConfig;
use isoshooter_sim::engine::SimConfig;

/// Headless isometric shooter session driven by an autopilot
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 1800)]
    ticks: u64,

    /// RNG seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// JSON tuning file; missing fields take their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pace ticks to wall-clock time
    #[arg(short, long)]
    realtime: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let game = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let handle = spawn_game_loop(
        SimConfig {
            seed: args.seed,
            game,
        },
        LoopOptions {
            max_ticks: Some(args.ticks),
            realtime: args.realtime,
        },
    )?;

    if let Some(snapshot) = drive(handle, &Autopilot::default()) {
        let score = &snapshot.score;
        info!(
            "Session over after {} ticks ({:.1}s): {} shots, {} kills, {} enemy shots, \
             {} hits taken",
            snapshot.time.tick,
            snapshot.time.elapsed_secs,
            score.shots_fired,
            score.enemies_killed,
            score.enemy_shots_fired,
            score.hits_taken
        );
    }
    Ok(())
}

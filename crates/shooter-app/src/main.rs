//! Headless runner: plays the board with the autopilot and prints a JSON
//! summary of every round to stdout.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use shooter_app::autopilot::Autopilot;
use shooter_app::game_loop::{GameLoop, LoopSettings};
use shooter_app::settings::load_board_config;
use shooter_app::viewport::Viewport;
use shooter_core::state::BoardSnapshot;
use shooter_core::types::aim_angle;
use shooter_sim::Board;

#[derive(Parser, Debug)]
#[command(name = "shooter", about = "Run the shooting board headless with an autopilot")]
struct Args {
    /// Frame cap per round
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Rounds to play; the board resets between rounds
    #[arg(long, default_value_t = 1)]
    rounds: u32,

    /// Override the config's RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// TOML board config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log as JSON instead of compact text
    #[arg(long)]
    json_logs: bool,

    /// Print every frame's snapshot as a JSON line
    #[arg(long)]
    snapshots: bool,

    /// Print every frame's draw list (500px viewport) as a JSON line
    #[arg(long)]
    draw_lists: bool,

    /// Pace frames to wall-clock time
    #[arg(long)]
    realtime: bool,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr so stdout stays machine-readable.
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    }
}

fn write_frame(
    out: &mut impl Write,
    args: &Args,
    viewport: &Viewport,
    snapshot: &BoardSnapshot,
) -> anyhow::Result<()> {
    if args.snapshots {
        writeln!(out, "{}", serde_json::to_string(snapshot)?)?;
    }
    if args.draw_lists {
        // The autopilot always aims at the enemy.
        let aim = aim_angle(snapshot.player.square.center, snapshot.enemy.square.center);
        writeln!(out, "{}", serde_json::to_string(&viewport.draw_list(snapshot, aim))?)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.json_logs);

    let mut config = load_board_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    info!(seed = config.seed, rounds = args.rounds, frames = args.frames, "starting");

    let board = Board::new(config).context("invalid board config")?;
    let settings = LoopSettings {
        max_frames: args.frames,
        rounds: args.rounds,
        realtime: args.realtime,
        ..Default::default()
    };
    let mut game = GameLoop::new(board, settings);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let viewport = Viewport::default();
    let mut write_error = None;
    let summary = game.run(&mut Autopilot::default(), |snapshot| {
        if write_error.is_none() {
            write_error = write_frame(&mut out, &args, &viewport, snapshot).err();
        }
    });
    if let Some(e) = write_error {
        return Err(e.context("failed to write frame output"));
    }

    serde_json::to_writer_pretty(&mut out, &summary).context("failed to write summary")?;
    writeln!(out)?;
    info!(
        total_score = summary.total_score(),
        total_frames = summary.total_frames(),
        "done"
    );
    Ok(())
}

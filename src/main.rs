//! Asteroid Drift entry point
//!
//! Runs the game loop against the headless platform: input comes from an
//! optional key script and frames are recorded rather than shown.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use asteroid_drift::assets::load_sprite_sheet;
use asteroid_drift::game_loop::{LoopExit, run};
use asteroid_drift::platform::{
    FrameClock, ManualClock, RecordingRenderer, ScriptedEvents, SleepClock,
};
use asteroid_drift::sim::World;
use asteroid_drift::{GameError, Settings};

#[derive(Debug, Parser)]
#[command(name = "asteroid-drift", version, about = "Screen-wrapping asteroid shooter")]
struct Args {
    /// Settings JSON (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the sprite paths are relative to
    #[arg(long, default_value = ".")]
    assets: PathBuf,

    /// Key script JSON: [{ "tick": 0, "key": "up", "pressed": true }, ...]
    #[arg(long)]
    script: Option<PathBuf>,

    /// World seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Don't sleep between ticks
    #[arg(long)]
    unpaced: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    match play(&args) {
        Ok(exit) => log::info!("Asteroid Drift stopped ({exit:?})"),
        Err(err) => {
            log::error!("{err}");
            eprintln!("asteroid-drift: {err}");
            std::process::exit(1);
        }
    }
}

fn play(args: &Args) -> Result<LoopExit, GameError> {
    log::info!("Asteroid Drift (headless) starting...");

    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let sprites = load_sprite_sheet(&args.assets, &settings.sprites)?;
    let mut events = match &args.script {
        Some(path) => ScriptedEvents::load(path)?,
        None => ScriptedEvents::default(),
    };

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
    });
    let mut world = World::new(settings, sprites, seed);
    log::info!("Seed {}", world.seed);
    let mut renderer = RecordingRenderer::new();

    let exit = if args.unpaced {
        run_with(&mut world, &mut events, &mut renderer, ManualClock::default(), args.max_ticks)
    } else {
        run_with(&mut world, &mut events, &mut renderer, SleepClock::new(), args.max_ticks)
    };

    log::info!(
        "{} ticks, {} frames, ship {}, {} asteroids, {} projectiles",
        world.time_ticks,
        renderer.frames_presented,
        if world.player_alive() { "alive" } else { "destroyed" },
        world.asteroids.len(),
        world.projectiles.len()
    );
    if !events.is_exhausted() {
        log::warn!("Loop stopped before the key script finished");
    }
    Ok(exit)
}

fn run_with(
    world: &mut World,
    events: &mut ScriptedEvents,
    renderer: &mut RecordingRenderer,
    mut clock: impl FrameClock,
    max_ticks: Option<u64>,
) -> LoopExit {
    run(world, events, renderer, &mut clock, max_ticks)
}

//! The binary entry point for the Glade headless host.

use clap::Parser;
use glade_app::AppError;
use glade_app::frame_clock::FrameClock;
use glade_app::session::{Script, run_session};
use glade_config::{CliArgs, Config, default_config_dir};
use glade_log::init_logging;
use glade_world::GladeWorld;
use tracing::{error, info};

fn main() -> Result<(), AppError> {
    let args = CliArgs::parse();

    let config_dir = match &args.config {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(&args);

    init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );
    info!(
        config = %config_dir.display(),
        seed = config.terrain.seed,
        frames = args.frames,
        "Glade starting"
    );

    let mut world = GladeWorld::new(&config).inspect_err(|e| error!("{e}"))?;
    let script = Script::standard(args.frames);
    let mut clock = FrameClock::new();

    run_session(&mut world, &script, args.frames, || {
        std::thread::sleep(std::time::Duration::from_secs_f64(clock.remaining_in_frame()));
        clock.tick()
    });

    info!(
        frames = clock.frame_count(),
        clamped = clock.clamped_count(),
        simulated_seconds = clock.total_time(),
        "Glade exiting"
    );
    Ok(())
}

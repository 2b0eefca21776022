//! Command-line argument parsing for the Glade host.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Glade command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "glade", about = "Headless outdoor scene simulation")]
pub struct CliArgs {
    /// Terrain and scatter seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Starting hour of day (0-24).
    #[arg(long)]
    pub hour: Option<f32>,

    /// Clock speed multiplier.
    #[arg(long)]
    pub speed: Option<f32>,

    /// Start with rain enabled.
    #[arg(long)]
    pub rain: Option<bool>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    pub frames: u32,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.terrain.seed = seed;
        }
        if let Some(hour) = args.hour {
            self.clock.start_hour = hour.rem_euclid(24.0);
        }
        if let Some(speed) = args.speed {
            self.clock.speed_multiplier = speed.max(0.0);
        }
        if let Some(rain) = args.rain {
            self.weather.rain_enabled = rain;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

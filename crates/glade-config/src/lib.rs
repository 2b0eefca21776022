//! Configuration system for the Glade scene simulation.
//!
//! Provides startup settings for every simulation subsystem, persisted to disk
//! as RON. Supports CLI overrides via clap, hot-reload detection, and
//! forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    ClockConfig, Config, CreatureConfig, DebugConfig, SceneConfig, TerrainConfig, WeatherConfig,
    default_config_dir,
};
pub use error::ConfigError;

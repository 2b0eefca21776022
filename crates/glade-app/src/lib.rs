//! Headless host for the Glade simulation.
//!
//! Provides the frame clock, the scripted demo session, and the error type the
//! binary propagates out of `main`.

pub mod frame_clock;
pub mod session;

use glade_config::ConfigError;
use glade_world::WorldError;

/// Anything that can stop the host before the session starts.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be located, read, or written.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The simulation could not be assembled.
    #[error(transparent)]
    World(#[from] WorldError),
}

//! Composition root for the Glade scene simulation.
//!
//! [`GladeWorld`] owns the ECS world, the tick schedule, and the immutable
//! terrain. It is the only type a host talks to: tick and pointer entry
//! points, registry mutations, panel setters, read-only render views, and the
//! sound queue.

mod controls;
mod panel;
mod report;
mod routing;
mod world;

#[cfg(test)]
mod world_tests;

use glade_terrain::TerrainError;

pub use panel::{
    COLOR_RANGE, ControlPanel, DROP_SIZE_RANGE, HOUR_RANGE, LIGHT_INTENSITY_RANGE, LightSection,
    METALNESS_RANGE, OPACITY_RANGE, ObjectSection, PENUMBRA_RANGE, POSITION_RANGE, PanelRange,
    RAIN_INTENSITY_RANGE, ROTATION_RANGE, ROUGHNESS_RANGE, SCALE_RANGE, SPEED_RANGE,
    SPOT_ANGLE_RANGE, SPOT_DISTANCE_RANGE, WIND_RANGE,
};
pub use report::{HourlyReport, hourly_report_system};
pub use routing::{dispatch_registry_events, route_registry_events_system};
pub use world::GladeWorld;

/// Errors returned while assembling the world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// Terrain parameters were rejected.
    #[error("terrain generation failed: {0}")]
    Terrain(#[from] TerrainError),

    /// A configuration value the simulation cannot run with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

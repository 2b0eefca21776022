//! Weather: a recycled rain particle buffer and wind-drifted clouds.
//!
//! Rain falls a fixed distance per tick; clouds drift by the wall-clock frame
//! delta. Neither reads the simulated hour or depends on the other.

mod clouds;
mod rain;
mod systems;

pub use clouds::{CLOUD_HALF_EXTENT, Cloud, CloudLayer, Puff};
pub use rain::{
    MAX_RAIN_INTENSITY, MIN_RAIN_INTENSITY, RAIN_CEILING, RAIN_HALF_EXTENT, RainField,
    RainParticle, RainSettings,
};
pub use systems::{cloud_drift_system, rain_fall_system};

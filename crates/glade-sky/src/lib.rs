//! Time of day: the simulation clock and the sun, moon, sky, and light levels derived from it.
//!
//! [`SimClock`] is the only mutable state. [`CelestialState`] is recomputed from
//! the hour every tick, so lighting can never drift away from the clock.

mod celestial;
mod clock;
mod systems;

pub use celestial::{CelestialBody, CelestialParams, CelestialState, Hsl, LightingRegime};
pub use clock::{ClockAdvance, HOURS_PER_DAY, SimClock, wrap_hour};
pub use systems::{advance_clock_system, update_celestial_system};

//! Clickable birds and frogs.
//!
//! A pointer ray picks the nearest creature; its species strategy
//! ([`behavior_for`]) requests a call sound and starts a [`Motion`] built from
//! explicit [`Tween`] records. Motions are sampled as a pure function of
//! simulation time each tick, so a new click simply replaces the record.

mod behavior;
mod creature;
mod easing;
mod herd;
mod hit;
mod systems;
mod tween;

pub use behavior::{
    BirdBehavior, CreatureBehavior, FLAP_ANGLE, FLAP_DURATION, FLAP_REPEATS, FLIGHT_DURATION,
    FLIGHT_VOLUME_MAX, FLIGHT_VOLUME_MIN, FrogBehavior, HOP_DURATION, HOP_HEIGHT, behavior_for,
};
pub use creature::{AnimationState, Creature, CreatureId, CreatureKind, Motion};
pub use easing::Easing;
pub use herd::{Creatures, FROG_RING_MAX, FROG_RING_MIN, PopulationParams};
pub use hit::{BoundingSphere, Ray};
pub use systems::animate_creatures_system;
pub use tween::{Interpolate, Tween};

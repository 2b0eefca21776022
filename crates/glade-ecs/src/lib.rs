//! ECS world setup, tick schedules, and the resources every simulation crate shares.
//!
//! Provides the [`World`](bevy_ecs::world::World) factory, the ordered
//! [`SimSchedules`] runner that executes one host tick, the frame [`TimeRes`],
//! the fire-and-forget [`SoundQueue`] audio boundary, and seeded RNG streams.

mod schedule;
mod seed;
mod sound;
mod time;
mod world;

pub use schedule::{SimSchedules, SimStage};
pub use seed::{derive_seed, seeded_rng};
pub use sound::{SoundCue, SoundQueue};
pub use time::TimeRes;
pub use world::{create_world, register_core_resources};

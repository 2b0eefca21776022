//! Scene registry: user-created lights and objects with an explicit add/remove lifecycle.
//!
//! Entries live in generational arenas, so a removed id can never resolve to a
//! later entry. Every create/remove emits a [`RegistryEvent`]; the UI binding
//! layer and the audio boundary subscribe to those instead of being called
//! from inside the registry.

mod arena;
mod events;
mod ids;
mod light;
mod object;
mod registry;

pub use arena::{Arena, ArenaKey};
pub use events::RegistryEvent;
pub use ids::{LightId, ObjectId};
pub use light::{LightEntry, LightHelper, LightKind, LightVariant, SpotParams};
pub use object::{Geometry, Material, ObjectEntry, ShapeKind, Transform};
pub use registry::{DEFAULT_LIGHT_INTENSITY, SceneRegistry};

//! World factory function and core resource registration.

use bevy_ecs::prelude::*;

use crate::{SoundQueue, TimeRes};

/// Registers the resources every simulation crate relies on.
pub fn register_core_resources(world: &mut World) {
    world.insert_resource(TimeRes::default());
    world.insert_resource(SoundQueue::default());
}

/// Creates an ECS world with [`TimeRes`] and [`SoundQueue`] pre-inserted.
pub fn create_world() -> World {
    let mut world = World::new();
    register_core_resources(&mut world);
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_world_has_core_resources() {
        let world = create_world();
        assert!(world.contains_resource::<TimeRes>());
        assert!(world.contains_resource::<SoundQueue>());
    }

    #[test]
    fn test_time_res_defaults() {
        let world = create_world();
        let time = world.resource::<TimeRes>();
        assert_eq!(time.delta, 0.0);
        assert_eq!(time.elapsed, 0.0);
        assert_eq!(time.tick, 0);
    }

    #[test]
    fn test_world_starts_with_no_entities() {
        let world = create_world();
        assert_eq!(world.entities().len(), 0);
    }
}

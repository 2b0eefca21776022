//! The creature population: spawning, pointer picking, and per-tick posing.

use std::f32::consts::TAU;

use bevy_ecs::prelude::*;
use glade_ecs::{SoundCue, SoundQueue};
use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::behavior::{FLIGHT_VOLUME_MAX, FLIGHT_VOLUME_MIN, behavior_for};
use crate::{Creature, CreatureId, CreatureKind, Ray};

/// Inner radius of the ring frogs spawn on.
pub const FROG_RING_MIN: f32 = 5.0;
/// Outer radius of the ring frogs spawn on.
pub const FROG_RING_MAX: f32 = 15.0;

/// How many of each species to spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopulationParams {
    /// Birds, placed inside the flight volume.
    pub bird_count: u32,
    /// Frogs, placed on the ground near the origin.
    pub frog_count: u32,
}

impl Default for PopulationParams {
    fn default() -> Self {
        Self {
            bird_count: 5,
            frog_count: 3,
        }
    }
}

/// Every creature in the scene plus the random stream their reactions draw from.
#[derive(Resource)]
pub struct Creatures {
    creatures: Vec<Creature>,
    rng: ChaCha8Rng,
}

impl Creatures {
    /// Spawn birds in the flight volume and frogs on a ring at ground height.
    pub fn spawn(
        params: PopulationParams,
        mut rng: ChaCha8Rng,
        ground: impl Fn(f32, f32) -> f32,
    ) -> Self {
        let mut placements = Vec::with_capacity((params.bird_count + params.frog_count) as usize);

        for _ in 0..params.bird_count {
            let position = Vec3::new(
                rng.random_range(FLIGHT_VOLUME_MIN.x..=FLIGHT_VOLUME_MAX.x),
                rng.random_range(FLIGHT_VOLUME_MIN.y..=FLIGHT_VOLUME_MAX.y),
                rng.random_range(FLIGHT_VOLUME_MIN.z..=FLIGHT_VOLUME_MAX.z),
            );
            placements.push((CreatureKind::Bird, position));
        }

        for _ in 0..params.frog_count {
            let angle = rng.random_range(0.0..TAU);
            let radius = rng.random_range(FROG_RING_MIN..=FROG_RING_MAX);
            let (x, z) = (angle.cos() * radius, angle.sin() * radius);
            placements.push((CreatureKind::Frog, Vec3::new(x, ground(x, z), z)));
        }

        info!(
            birds = params.bird_count,
            frogs = params.frog_count,
            "creatures spawned"
        );
        Self::from_placements(&placements, rng)
    }

    /// Build a population at fixed positions. Ids follow slice order.
    pub fn from_placements(placements: &[(CreatureKind, Vec3)], rng: ChaCha8Rng) -> Self {
        let creatures = placements
            .iter()
            .enumerate()
            .map(|(i, &(kind, position))| Creature::new(CreatureId(i as u32), kind, position))
            .collect();
        Self { creatures, rng }
    }

    /// Nearest creature whose proxy `ray` hits. Ties go to the lower id.
    pub fn hit_test(&self, ray: &Ray) -> Option<CreatureId> {
        self.creatures
            .iter()
            .filter_map(|c| c.proxy().intersect(ray).map(|t| (t, c.id())))
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
            .map(|(_, id)| id)
    }

    /// Start the species reaction on `id`, replacing any motion in progress.
    ///
    /// The creature is first posed at `now` so the new motion starts from
    /// where it visibly is.
    pub fn trigger(&mut self, id: CreatureId, now: f64) -> Option<SoundCue> {
        let creature = self.creatures.get_mut(id.0 as usize)?;
        creature.animate(now);

        let behavior = behavior_for(creature.kind());
        let motion = behavior.react(creature, now, &mut self.rng);
        creature.start(motion);
        debug!(creature = %id, kind = ?creature.kind(), "creature reacting");
        Some(behavior.call())
    }

    /// Pick the nearest creature under `ray` and react. Returns whether anything was hit.
    pub fn on_pointer_click(&mut self, ray: &Ray, now: f64, sounds: &mut SoundQueue) -> bool {
        let Some(id) = self.hit_test(ray) else {
            return false;
        };
        if let Some(cue) = self.trigger(id, now) {
            sounds.play(cue);
        }
        true
    }

    /// Pose every moving creature at `now`.
    pub fn step(&mut self, now: f64) {
        for creature in self.creatures.iter_mut().filter(|c| c.is_moving()) {
            creature.animate(now);
        }
    }

    /// Creature by id.
    pub fn get(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.get(id.0 as usize)
    }

    /// All creatures in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }

    /// Creatures currently animating.
    pub fn moving_count(&self) -> usize {
        self.creatures.iter().filter(|c| c.is_moving()).count()
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

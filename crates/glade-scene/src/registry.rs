//! The registry itself.

use bevy_ecs::prelude::*;
use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::{
    Arena, Geometry, LightEntry, LightHelper, LightId, LightKind, Material, ObjectEntry, ObjectId,
    RegistryEvent, ShapeKind, Transform,
};

/// Intensity every new light starts with.
pub const DEFAULT_LIGHT_INTENSITY: f32 = 5.0;

/// Lights without an explicit position are placed around this point.
const LIGHT_ANCHOR: Vec3 = Vec3::new(0.0, 10.0, 0.0);
/// Vertical jitter range added to new lights.
const LIGHT_LIFT: f32 = 5.0;
/// New objects float between these heights.
const OBJECT_HEIGHT: std::ops::RangeInclusive<f32> = 1.0..=3.0;

/// Id-indexed storage for user-created lights and objects.
///
/// Reads go through shared borrows and writes through `&mut self`, so the
/// collections can never change under an in-flight iteration. Callers that
/// need to mutate while walking take an id snapshot first
/// ([`light_ids`](Self::light_ids), [`object_ids`](Self::object_ids)).
#[derive(Resource)]
pub struct SceneRegistry {
    lights: Arena<LightEntry>,
    objects: Arena<ObjectEntry>,
    lights_created: u64,
    objects_created: u64,
    spread: f32,
    rng: ChaCha8Rng,
    events: Vec<RegistryEvent>,
}

impl SceneRegistry {
    /// Create an empty registry. New entries are jittered by up to `spread`
    /// horizontally so they do not stack on top of each other.
    pub fn new(spread: f32, rng: ChaCha8Rng) -> Self {
        Self {
            lights: Arena::new(),
            objects: Arena::new(),
            lights_created: 0,
            objects_created: 0,
            spread: spread.abs(),
            rng,
            events: Vec::new(),
        }
    }

    // -- lights --------------------------------------------------------------

    /// Create a light with default color and intensity.
    ///
    /// With `position` the light goes exactly there; otherwise it is placed
    /// at a random offset around a point above the origin.
    pub fn create_light(&mut self, kind: LightKind, position: Option<Vec3>) -> LightId {
        self.lights_created += 1;
        let name = format!("{} {}", kind.label(), self.lights_created);
        let position = position.unwrap_or_else(|| {
            let offset = self.horizontal_jitter() + Vec3::Y * self.rng.random_range(0.0..=LIGHT_LIFT);
            LIGHT_ANCHOR + offset
        });

        let entry = LightEntry {
            name: name.clone(),
            color: [1.0, 1.0, 1.0],
            intensity: DEFAULT_LIGHT_INTENSITY,
            position,
            variant: kind.default_variant(),
            helper: LightHelper {
                kind,
                size: kind.helper_size(),
                visible: true,
            },
        };
        let id = LightId::new(self.lights.insert(entry));

        info!(%id, %name, ?position, "light created");
        self.events.push(RegistryEvent::LightAdded { id, kind, name });
        id
    }

    /// Remove a light together with its helper. Unknown ids are a no-op.
    ///
    /// Returns whether anything was removed.
    pub fn remove_light(&mut self, id: LightId) -> bool {
        let Some(entry) = self.lights.remove(id.key()) else {
            debug!(%id, "remove_light: unknown id");
            return false;
        };
        info!(%id, name = %entry.name, "light removed");
        self.events.push(RegistryEvent::LightRemoved {
            id,
            kind: entry.kind(),
            name: entry.name,
        });
        true
    }

    /// Borrow a light.
    pub fn light(&self, id: LightId) -> Option<&LightEntry> {
        self.lights.get(id.key())
    }

    /// Mutably borrow a light's fields.
    pub fn light_mut(&mut self, id: LightId) -> Option<&mut LightEntry> {
        self.lights.get_mut(id.key())
    }

    /// Live lights.
    pub fn lights(&self) -> impl Iterator<Item = (LightId, &LightEntry)> {
        self.lights.iter().map(|(key, entry)| (LightId::new(key), entry))
    }

    /// Snapshot of live light ids.
    pub fn light_ids(&self) -> Vec<LightId> {
        self.lights().map(|(id, _)| id).collect()
    }

    /// Number of live lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Helpers of live lights, with the position each one is drawn at.
    pub fn helpers(&self) -> impl Iterator<Item = (LightId, &LightHelper, Vec3)> {
        self.lights()
            .map(|(id, entry)| (id, &entry.helper, entry.position))
    }

    // -- objects -------------------------------------------------------------

    /// Create an object with the default gray material at a random offset.
    pub fn create_object(&mut self, shape: ShapeKind) -> ObjectId {
        self.objects_created += 1;
        let name = format!("{} {}", shape.label(), self.objects_created);
        let position = self.horizontal_jitter() + Vec3::Y * self.rng.random_range(OBJECT_HEIGHT);

        let entry = ObjectEntry {
            name: name.clone(),
            shape,
            geometry: Geometry::for_shape(shape),
            material: Material::default(),
            transform: Transform {
                position,
                ..Default::default()
            },
        };
        let id = ObjectId::new(self.objects.insert(entry));

        info!(%id, %name, ?position, "object created");
        self.events.push(RegistryEvent::ObjectAdded { id, shape, name });
        id
    }

    /// Remove an object. Unknown ids are a no-op.
    ///
    /// Returns whether anything was removed.
    pub fn remove_object(&mut self, id: ObjectId) -> bool {
        let Some(entry) = self.objects.remove(id.key()) else {
            debug!(%id, "remove_object: unknown id");
            return false;
        };
        info!(%id, name = %entry.name, "object removed");
        self.events.push(RegistryEvent::ObjectRemoved {
            id,
            shape: entry.shape,
            name: entry.name,
        });
        true
    }

    /// Borrow an object.
    pub fn object(&self, id: ObjectId) -> Option<&ObjectEntry> {
        self.objects.get(id.key())
    }

    /// Mutably borrow an object's fields.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut ObjectEntry> {
        self.objects.get_mut(id.key())
    }

    /// Live objects.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &ObjectEntry)> {
        self.objects.iter().map(|(key, entry)| (ObjectId::new(key), entry))
    }

    /// Snapshot of live object ids.
    pub fn object_ids(&self) -> Vec<ObjectId> {
        self.objects().map(|(id, _)| id).collect()
    }

    /// Number of live objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    // -- events --------------------------------------------------------------

    /// Take every lifecycle event since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of undrained events.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    fn horizontal_jitter(&mut self) -> Vec3 {
        if self.spread == 0.0 {
            return Vec3::ZERO;
        }
        Vec3::new(
            self.rng.random_range(-self.spread..=self.spread),
            0.0,
            self.rng.random_range(-self.spread..=self.spread),
        )
    }
}

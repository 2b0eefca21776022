//! Control-panel binding layer.
//!
//! The panel never reads the registry directly: it keeps one section per live
//! light or object and builds or tears those down from [`RegistryEvent`]s.
//! The ranges here are the limits every setter clamps to before a value
//! reaches the simulation.

use std::f32::consts::{FRAC_PI_2, TAU};

use bevy_ecs::prelude::*;
use glade_scene::{LightId, LightKind, ObjectId, RegistryEvent, ShapeKind};
use glade_weather::{MAX_RAIN_INTENSITY, MIN_RAIN_INTENSITY};
use tracing::trace;

/// Closed interval a panel control accepts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRange {
    /// Lowest accepted value.
    pub min: f32,
    /// Highest accepted value.
    pub max: f32,
}

impl PanelRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the range. NaN maps to `min`.
    pub fn clamp(self, value: f32) -> f32 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

pub const HOUR_RANGE: PanelRange = PanelRange::new(0.0, 24.0);
pub const SPEED_RANGE: PanelRange = PanelRange::new(0.0, 10.0);
pub const RAIN_INTENSITY_RANGE: PanelRange = PanelRange::new(MIN_RAIN_INTENSITY, MAX_RAIN_INTENSITY);
pub const OPACITY_RANGE: PanelRange = PanelRange::new(0.0, 1.0);
pub const DROP_SIZE_RANGE: PanelRange = PanelRange::new(0.01, 1.0);
pub const WIND_RANGE: PanelRange = PanelRange::new(0.0, 10.0);
pub const COLOR_RANGE: PanelRange = PanelRange::new(0.0, 1.0);
pub const LIGHT_INTENSITY_RANGE: PanelRange = PanelRange::new(0.0, 10.0);
pub const POSITION_RANGE: PanelRange = PanelRange::new(-50.0, 50.0);
pub const ROTATION_RANGE: PanelRange = PanelRange::new(0.0, TAU);
pub const SCALE_RANGE: PanelRange = PanelRange::new(0.1, 5.0);
pub const ROUGHNESS_RANGE: PanelRange = PanelRange::new(0.0, 1.0);
pub const METALNESS_RANGE: PanelRange = PanelRange::new(0.0, 1.0);
pub const SPOT_ANGLE_RANGE: PanelRange = PanelRange::new(0.0, FRAC_PI_2);
pub const PENUMBRA_RANGE: PanelRange = PanelRange::new(0.0, 1.0);
pub const SPOT_DISTANCE_RANGE: PanelRange = PanelRange::new(0.0, 100.0);

/// Panel folder bound to one light.
#[derive(Clone, Debug, PartialEq)]
pub struct LightSection {
    /// Light the controls write to.
    pub id: LightId,
    /// Folder title.
    pub title: String,
    /// Light type; spot lights get extra cone controls.
    pub kind: LightKind,
}

impl LightSection {
    /// Whether the angle/penumbra/range controls are shown.
    pub fn has_spot_controls(&self) -> bool {
        self.kind == LightKind::Spot
    }
}

/// Panel folder bound to one object.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectSection {
    /// Object the controls write to.
    pub id: ObjectId,
    /// Folder title.
    pub title: String,
    /// Shape of the bound object.
    pub shape: ShapeKind,
}

/// Live panel sections, in creation order.
#[derive(Resource, Debug, Default)]
pub struct ControlPanel {
    lights: Vec<LightSection>,
    objects: Vec<ObjectSection>,
}

impl ControlPanel {
    /// Build or tear down the section a registry event refers to.
    pub fn apply(&mut self, event: &RegistryEvent) {
        match event {
            RegistryEvent::LightAdded { id, kind, name } => self.lights.push(LightSection {
                id: *id,
                title: name.clone(),
                kind: *kind,
            }),
            RegistryEvent::LightRemoved { id, .. } => self.lights.retain(|s| s.id != *id),
            RegistryEvent::ObjectAdded { id, shape, name } => self.objects.push(ObjectSection {
                id: *id,
                title: name.clone(),
                shape: *shape,
            }),
            RegistryEvent::ObjectRemoved { id, .. } => self.objects.retain(|s| s.id != *id),
        }
        trace!(sections = self.section_count(), "panel updated");
    }

    pub fn light_section(&self, id: LightId) -> Option<&LightSection> {
        self.lights.iter().find(|s| s.id == id)
    }

    pub fn object_section(&self, id: ObjectId) -> Option<&ObjectSection> {
        self.objects.iter().find(|s| s.id == id)
    }

    pub fn light_sections(&self) -> &[LightSection] {
        &self.lights
    }

    pub fn object_sections(&self) -> &[ObjectSection] {
        &self.objects
    }

    /// Total live sections.
    pub fn section_count(&self) -> usize {
        self.lights.len() + self.objects.len()
    }
}

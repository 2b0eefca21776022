//! Panel setters. Every value is clamped to its [`PanelRange`] first; unknown
//! ids are ignored and reported as `false`.
//!
//! [`PanelRange`]: crate::PanelRange

use glade_scene::{LightId, ObjectId, SceneRegistry};
use glade_sky::{CelestialParams, CelestialState, SimClock};
use glade_weather::{CloudLayer, RainField};
use glam::Vec3;

use crate::GladeWorld;
use crate::panel::{
    COLOR_RANGE, DROP_SIZE_RANGE, HOUR_RANGE, LIGHT_INTENSITY_RANGE, METALNESS_RANGE,
    OPACITY_RANGE, PENUMBRA_RANGE, POSITION_RANGE, PanelRange, RAIN_INTENSITY_RANGE,
    ROTATION_RANGE, ROUGHNESS_RANGE, SCALE_RANGE, SPEED_RANGE, SPOT_ANGLE_RANGE,
    SPOT_DISTANCE_RANGE, WIND_RANGE,
};

fn clamp_color(color: [f32; 3]) -> [f32; 3] {
    color.map(|c| COLOR_RANGE.clamp(c))
}

fn clamp_vec(range: PanelRange, v: Vec3) -> Vec3 {
    Vec3::new(range.clamp(v.x), range.clamp(v.y), range.clamp(v.z))
}

impl GladeWorld {
    // -- clock ---------------------------------------------------------------

    /// Jump the clock and re-derive the lighting right away.
    pub fn set_hour(&mut self, hour: f32) {
        let hour = {
            let mut clock = self.world.resource_mut::<SimClock>();
            clock.set_hour(HOUR_RANGE.clamp(hour));
            clock.hour()
        };
        let state = CelestialState::from_hour(hour, self.world.resource::<CelestialParams>());
        *self.world.resource_mut::<CelestialState>() = state;
    }

    pub fn set_speed_multiplier(&mut self, speed: f32) {
        self.world.resource_mut::<SimClock>().speed_multiplier = SPEED_RANGE.clamp(speed);
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.world.resource_mut::<SimClock>().playing = playing;
    }

    // -- weather -------------------------------------------------------------

    /// Turning rain on redistributes every particle before the next tick.
    pub fn set_rain_enabled(&mut self, enabled: bool) {
        self.world.resource_mut::<RainField>().set_enabled(enabled);
    }

    pub fn set_rain_intensity(&mut self, intensity: f32) {
        self.world.resource_mut::<RainField>().settings.intensity =
            RAIN_INTENSITY_RANGE.clamp(intensity);
    }

    pub fn set_rain_color(&mut self, color: [f32; 3]) {
        self.world.resource_mut::<RainField>().settings.color = clamp_color(color);
    }

    pub fn set_rain_opacity(&mut self, opacity: f32) {
        self.world.resource_mut::<RainField>().settings.opacity = OPACITY_RANGE.clamp(opacity);
    }

    pub fn set_rain_drop_size(&mut self, size: f32) {
        self.world.resource_mut::<RainField>().settings.drop_size = DROP_SIZE_RANGE.clamp(size);
    }

    pub fn set_wind_speed(&mut self, speed: f32) {
        self.world.resource_mut::<CloudLayer>().wind_speed = WIND_RANGE.clamp(speed);
    }

    // -- lights --------------------------------------------------------------

    pub fn set_light_color(&mut self, id: LightId, color: [f32; 3]) -> bool {
        self.with_light(id, |light| light.color = clamp_color(color))
    }

    pub fn set_light_intensity(&mut self, id: LightId, intensity: f32) -> bool {
        self.with_light(id, |light| {
            light.intensity = LIGHT_INTENSITY_RANGE.clamp(intensity)
        })
    }

    pub fn set_light_position(&mut self, id: LightId, position: Vec3) -> bool {
        self.with_light(id, |light| {
            light.position = clamp_vec(POSITION_RANGE, position)
        })
    }

    /// Show or hide the light's helper gizmo.
    pub fn set_light_helper_visible(&mut self, id: LightId, visible: bool) -> bool {
        self.with_light(id, |light| light.helper.visible = visible)
    }

    /// Cone half-angle. `false` for unknown ids and non-spot lights.
    pub fn set_spot_angle(&mut self, id: LightId, angle: f32) -> bool {
        self.with_spot(id, |spot| spot.angle = SPOT_ANGLE_RANGE.clamp(angle))
    }

    pub fn set_spot_penumbra(&mut self, id: LightId, penumbra: f32) -> bool {
        self.with_spot(id, |spot| spot.penumbra = PENUMBRA_RANGE.clamp(penumbra))
    }

    pub fn set_spot_range(&mut self, id: LightId, range: f32) -> bool {
        self.with_spot(id, |spot| spot.range = SPOT_DISTANCE_RANGE.clamp(range))
    }

    // -- objects -------------------------------------------------------------

    pub fn set_object_color(&mut self, id: ObjectId, color: [f32; 3]) -> bool {
        self.with_object(id, |object| {
            object.material.color = clamp_color(color)
        })
    }

    pub fn set_object_roughness(&mut self, id: ObjectId, roughness: f32) -> bool {
        self.with_object(id, |object| {
            object.material.roughness = ROUGHNESS_RANGE.clamp(roughness)
        })
    }

    pub fn set_object_metalness(&mut self, id: ObjectId, metalness: f32) -> bool {
        self.with_object(id, |object| {
            object.material.metalness = METALNESS_RANGE.clamp(metalness)
        })
    }

    pub fn set_object_position(&mut self, id: ObjectId, position: Vec3) -> bool {
        self.with_object(id, |object| {
            object.transform.position = clamp_vec(POSITION_RANGE, position)
        })
    }

    pub fn set_object_rotation(&mut self, id: ObjectId, rotation: Vec3) -> bool {
        self.with_object(id, |object| {
            object.transform.rotation = clamp_vec(ROTATION_RANGE, rotation)
        })
    }

    pub fn set_object_scale(&mut self, id: ObjectId, scale: Vec3) -> bool {
        self.with_object(id, |object| {
            object.transform.scale = clamp_vec(SCALE_RANGE, scale)
        })
    }

    fn with_light(&mut self, id: LightId, f: impl FnOnce(&mut glade_scene::LightEntry)) -> bool {
        let mut registry = self.world.resource_mut::<SceneRegistry>();
        registry.light_mut(id).map(f).is_some()
    }

    fn with_spot(&mut self, id: LightId, f: impl FnOnce(&mut glade_scene::SpotParams)) -> bool {
        let mut registry = self.world.resource_mut::<SceneRegistry>();
        registry
            .light_mut(id)
            .and_then(|light| light.spot_mut())
            .map(f)
            .is_some()
    }

    fn with_object(&mut self, id: ObjectId, f: impl FnOnce(&mut glade_scene::ObjectEntry)) -> bool {
        let mut registry = self.world.resource_mut::<SceneRegistry>();
        registry.object_mut(id).map(f).is_some()
    }
}

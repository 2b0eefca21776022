//! The composed simulation and its host-facing entry points.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::IntoSystemConfigs;
use glade_config::Config;
use glade_creatures::{Creatures, PopulationParams, Ray, animate_creatures_system};
use glade_ecs::{SimSchedules, SimStage, SoundCue, SoundQueue, TimeRes, create_world, seeded_rng};
use glade_scene::{LightId, LightKind, ObjectId, SceneRegistry, ShapeKind};
use glade_sky::{
    CelestialParams, CelestialState, SimClock, advance_clock_system, update_celestial_system,
};
use glade_terrain::{
    GroundPlane, HeightfieldParams, Octave, ScatterParams, Terrain, TerrainBuilder, TerrainParams,
};
use glade_weather::{CloudLayer, RainField, RainSettings, cloud_drift_system, rain_fall_system};
use glam::Vec3;
use tracing::info;

use crate::panel::RAIN_INTENSITY_RANGE;
use crate::report::{HourlyReport, hourly_report_system};
use crate::routing::{dispatch_registry_events, route_registry_events_system};
use crate::{ControlPanel, WorldError};

/// Terrain, sky, weather, scene, and creatures driven by one ordered schedule.
///
/// The host calls [`on_tick`](Self::on_tick) once per frame and the pointer
/// and registry entry points between frames. Everything runs on the caller's
/// thread.
pub struct GladeWorld {
    pub(crate) world: World,
    schedules: SimSchedules,
    terrain: Terrain,
}

impl GladeWorld {
    /// Build every subsystem from `config`.
    pub fn new(config: &Config) -> Result<Self, WorldError> {
        validate(config)?;
        let seed = config.terrain.seed;

        let terrain = TerrainBuilder::new(terrain_params(config)).build()?;

        let mut world = create_world();
        let clock = SimClock::new(
            config.clock.start_hour,
            config.clock.speed_multiplier,
            config.clock.playing,
            config.clock.hours_per_second,
        );
        let celestial = CelestialParams {
            orbit_radius: config.clock.orbit_radius,
            ..Default::default()
        };
        world.insert_resource(CelestialState::from_hour(clock.hour(), &celestial));
        world.insert_resource(celestial);
        world.insert_resource(clock);

        let weather = &config.weather;
        let settings = RainSettings {
            intensity: RAIN_INTENSITY_RANGE.clamp(weather.rain_intensity),
            color: weather.rain_color,
            opacity: weather.rain_opacity,
            drop_size: weather.rain_drop_size,
        };
        world.insert_resource(RainField::new(
            weather.rain_count as usize,
            settings,
            weather.rain_enabled,
            seeded_rng(seed, "rain"),
        ));
        world.insert_resource(CloudLayer::scatter(
            weather.cloud_count as usize,
            weather.wind_speed,
            &mut seeded_rng(seed, "clouds"),
        ));

        world.insert_resource(SceneRegistry::new(
            config.scene.placement_spread,
            seeded_rng(seed, "scene"),
        ));
        world.insert_resource(Creatures::spawn(
            PopulationParams {
                bird_count: config.creatures.bird_count,
                frog_count: config.creatures.frog_count,
            },
            seeded_rng(seed, "creatures"),
            |x, z| terrain.height_at(x, z),
        ));
        world.insert_resource(ControlPanel::default());
        world.insert_resource(HourlyReport::new(config.debug.log_hourly));

        let mut schedules = SimSchedules::new();
        schedules.add_system(SimStage::PreUpdate, advance_clock_system);
        schedules.add_system(
            SimStage::Update,
            (
                update_celestial_system,
                rain_fall_system,
                cloud_drift_system,
                animate_creatures_system,
            )
                .chain(),
        );
        schedules.add_system(
            SimStage::PostUpdate,
            (route_registry_events_system, hourly_report_system).chain(),
        );

        info!(seed, hour = config.clock.start_hour, "world ready");
        Ok(Self {
            world,
            schedules,
            terrain,
        })
    }

    /// Advance the whole simulation by one frame of `delta_seconds`.
    pub fn on_tick(&mut self, delta_seconds: f32) {
        self.schedules.run(&mut self.world, delta_seconds);
    }

    /// Dispatch a pointer click to the nearest creature under `ray`.
    ///
    /// Returns whether a creature was hit.
    pub fn on_pointer_click(&mut self, ray: &Ray) -> bool {
        let now = self.world.resource::<TimeRes>().elapsed;
        self.world
            .resource_scope(|world, mut creatures: Mut<'_, Creatures>| {
                let mut sounds = world.resource_mut::<SoundQueue>();
                creatures.on_pointer_click(ray, now, &mut sounds)
            })
    }

    // -- registry ------------------------------------------------------------

    pub fn create_light(&mut self, kind: LightKind, position: Option<Vec3>) -> LightId {
        let id = self
            .world
            .resource_mut::<SceneRegistry>()
            .create_light(kind, position);
        self.route_events();
        id
    }

    pub fn remove_light(&mut self, id: LightId) -> bool {
        let removed = self.world.resource_mut::<SceneRegistry>().remove_light(id);
        self.route_events();
        removed
    }

    pub fn create_object(&mut self, shape: ShapeKind) -> ObjectId {
        let id = self
            .world
            .resource_mut::<SceneRegistry>()
            .create_object(shape);
        self.route_events();
        id
    }

    pub fn remove_object(&mut self, id: ObjectId) -> bool {
        let removed = self.world.resource_mut::<SceneRegistry>().remove_object(id);
        self.route_events();
        removed
    }

    /// Apply registry events right away so the panel never lags a mutation.
    fn route_events(&mut self) {
        let events = self.world.resource_mut::<SceneRegistry>().drain_events();
        if events.is_empty() {
            return;
        }
        self.world
            .resource_scope(|world, mut panel: Mut<'_, ControlPanel>| {
                let mut sounds = world.resource_mut::<SoundQueue>();
                dispatch_registry_events(&events, &mut panel, &mut sounds);
            });
    }

    // -- render boundary -----------------------------------------------------

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn clock(&self) -> &SimClock {
        self.world.resource::<SimClock>()
    }

    pub fn celestial(&self) -> &CelestialState {
        self.world.resource::<CelestialState>()
    }

    pub fn rain(&self) -> &RainField {
        self.world.resource::<RainField>()
    }

    pub fn clouds(&self) -> &CloudLayer {
        self.world.resource::<CloudLayer>()
    }

    pub fn registry(&self) -> &SceneRegistry {
        self.world.resource::<SceneRegistry>()
    }

    pub fn creatures(&self) -> &Creatures {
        self.world.resource::<Creatures>()
    }

    pub fn panel(&self) -> &ControlPanel {
        self.world.resource::<ControlPanel>()
    }

    /// Frame time bookkeeping.
    pub fn time(&self) -> &TimeRes {
        self.world.resource::<TimeRes>()
    }

    /// Take every pending sound request.
    pub fn drain_sounds(&mut self) -> Vec<SoundCue> {
        self.world.resource_mut::<SoundQueue>().drain()
    }

    /// The underlying ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }
}

fn validate(config: &Config) -> Result<(), WorldError> {
    let clock = &config.clock;
    if !clock.start_hour.is_finite() {
        return Err(WorldError::InvalidConfig(format!(
            "clock.start_hour must be finite, got {}",
            clock.start_hour
        )));
    }
    if !clock.speed_multiplier.is_finite() {
        return Err(WorldError::InvalidConfig(format!(
            "clock.speed_multiplier must be finite, got {}",
            clock.speed_multiplier
        )));
    }
    if !(clock.hours_per_second.is_finite() && clock.hours_per_second >= 0.0) {
        return Err(WorldError::InvalidConfig(format!(
            "clock.hours_per_second must be a non-negative number, got {}",
            clock.hours_per_second
        )));
    }
    if !(clock.orbit_radius.is_finite() && clock.orbit_radius > 0.0) {
        return Err(WorldError::InvalidConfig(format!(
            "clock.orbit_radius must be positive, got {}",
            clock.orbit_radius
        )));
    }
    if !config.scene.placement_spread.is_finite() {
        return Err(WorldError::InvalidConfig(
            "scene.placement_spread must be finite".to_string(),
        ));
    }
    Ok(())
}

fn terrain_params(config: &Config) -> TerrainParams {
    let terrain = &config.terrain;
    TerrainParams {
        seed: terrain.seed,
        ground: GroundPlane {
            size: terrain.ground_size,
            ..Default::default()
        },
        heightfield: HeightfieldParams {
            size: terrain.size,
            segments: terrain.segments,
            octaves: terrain
                .octaves
                .iter()
                .map(|&(frequency, amplitude)| Octave::new(frequency, amplitude))
                .collect(),
        },
        trees: ScatterParams {
            count: terrain.tree_count,
            min_radius: terrain.tree_min_radius,
            max_radius: terrain.tree_max_radius,
            ..Default::default()
        },
    }
}

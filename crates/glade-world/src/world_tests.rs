//! Composition tests for [`GladeWorld`](crate::GladeWorld) entry points.

use glade_config::Config;
use glade_creatures::{CreatureId, CreatureKind, Creatures, Ray};
use glade_ecs::{SoundCue, seeded_rng};
use glade_scene::{LightKind, ShapeKind};
use glade_weather::RAIN_CEILING;
use glam::Vec3;

use crate::{GladeWorld, WorldError};

fn small_config() -> Config {
    let mut config = Config::default();
    config.terrain.seed = 42;
    config.terrain.segments = 16;
    config.terrain.tree_count = 5;
    config.weather.rain_count = 200;
    config.weather.cloud_count = 3;
    config.creatures.bird_count = 2;
    config.creatures.frog_count = 2;
    config.debug.log_hourly = false;
    config
}

fn world() -> GladeWorld {
    GladeWorld::new(&small_config()).unwrap()
}

#[test]
fn test_world_builds_from_config() {
    let world = world();
    assert_eq!(world.terrain().heightfield().segments(), 16);
    assert_eq!(world.terrain().trees().len(), 5);
    assert_eq!(world.rain().len(), 200);
    assert_eq!(world.clouds().clouds().len(), 3);
    assert_eq!(world.creatures().len(), 4);
    assert_eq!(world.clock().hour(), 12.0);
    assert!(world.celestial().is_day);
    assert_eq!(world.panel().section_count(), 0);
}

#[test]
fn test_light_round_trip_updates_panel_and_sounds() {
    let mut world = world();
    let id = world.create_light(LightKind::Point, None);

    assert_eq!(world.registry().light_count(), 1);
    assert_eq!(world.panel().light_section(id).unwrap().kind, LightKind::Point);
    assert_eq!(world.drain_sounds(), vec![SoundCue::AddLight]);

    assert!(world.remove_light(id));
    assert_eq!(world.registry().light_count(), 0);
    assert!(world.registry().helpers().next().is_none());
    assert!(world.panel().light_section(id).is_none());
    assert_eq!(world.drain_sounds(), vec![SoundCue::RemoveLight]);

    assert!(!world.remove_light(id));
    assert!(world.drain_sounds().is_empty());
}

#[test]
fn test_object_round_trip_and_stale_id() {
    let mut world = world();
    let first = world.create_object(ShapeKind::Torus);
    assert!(world.remove_object(first));
    let second = world.create_object(ShapeKind::Torus);

    assert_ne!(first, second);
    assert!(world.registry().object(first).is_none());
    assert!(!world.set_object_roughness(first, 0.2));
    assert!(world.panel().object_section(second).is_some());
    assert_eq!(world.panel().section_count(), 1);
    assert_eq!(
        world.drain_sounds(),
        vec![SoundCue::AddObject, SoundCue::RemoveObject, SoundCue::AddObject]
    );
}

#[test]
fn test_spheres_have_independent_materials() {
    let mut world = world();
    let a = world.create_object(ShapeKind::Sphere);
    let b = world.create_object(ShapeKind::Sphere);

    assert!(world.set_object_color(a, [1.0, 0.0, 0.0]));
    assert!(world.set_object_metalness(a, 0.9));

    let registry = world.registry();
    assert_eq!(registry.object(a).unwrap().material.color, [1.0, 0.0, 0.0]);
    assert_eq!(registry.object(b).unwrap().material.color, [0.5, 0.5, 0.5]);
    assert_eq!(registry.object(b).unwrap().material.metalness, 0.5);
    assert_ne!(registry.object(a).unwrap().name, registry.object(b).unwrap().name);
}

#[test]
fn test_setters_clamp_to_panel_ranges() {
    let mut world = world();
    let light = world.create_light(LightKind::Point, None);
    let object = world.create_object(ShapeKind::Cube);

    world.set_rain_intensity(10.0);
    world.set_rain_opacity(-1.0);
    world.set_wind_speed(-5.0);
    world.set_speed_multiplier(50.0);
    assert!(world.set_light_intensity(light, 99.0));
    assert!(world.set_object_scale(object, Vec3::new(0.0, 2.0, 9.0)));

    assert_eq!(world.rain().settings.intensity, 3.0);
    assert_eq!(world.rain().settings.opacity, 0.0);
    assert_eq!(world.clouds().wind_speed, 0.0);
    assert_eq!(world.clock().speed_multiplier, 10.0);
    assert_eq!(world.registry().light(light).unwrap().intensity, 10.0);
    assert_eq!(
        world.registry().object(object).unwrap().transform.scale,
        Vec3::new(0.1, 2.0, 5.0)
    );
}

#[test]
fn test_spot_setters_only_touch_spot_lights() {
    let mut world = world();
    let point = world.create_light(LightKind::Point, None);
    let spot = world.create_light(LightKind::Spot, None);

    assert!(!world.set_spot_angle(point, 0.3));
    assert!(world.set_spot_angle(spot, 5.0));
    assert!(world.set_spot_penumbra(spot, 0.4));

    let params = world.registry().light(spot).unwrap().spot().copied().unwrap();
    assert_eq!(params.angle, std::f32::consts::FRAC_PI_2);
    assert_eq!(params.penumbra, 0.4);
}

#[test]
fn test_clock_wraps_through_tick() {
    let mut config = small_config();
    config.clock.start_hour = 23.9;
    config.clock.hours_per_second = 1.0;
    let mut world = GladeWorld::new(&config).unwrap();

    world.on_tick(0.2);
    let hour = world.clock().hour();
    assert!((hour - 0.1).abs() < 1e-4, "hour {hour}");
    assert_eq!(world.celestial().hour, hour);
    assert!(!world.celestial().is_day);
}

#[test]
fn test_paused_clock_holds_and_set_hour_wraps() {
    let mut world = world();
    world.set_playing(false);
    world.on_tick(5.0);
    assert_eq!(world.clock().hour(), 12.0);

    world.set_hour(30.0);
    assert_eq!(world.clock().hour(), 0.0);
    world.on_tick(0.016);
    assert!(!world.celestial().is_day);
}

#[test]
fn test_rain_stays_frozen_while_off() {
    let mut world = world();
    let before: Vec<Vec3> = world.rain().particles().iter().map(|p| p.position).collect();
    for _ in 0..5 {
        world.on_tick(0.016);
    }
    let after: Vec<Vec3> = world.rain().particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
    assert!(!world.rain().is_visible());
}

#[test]
fn test_rain_reenable_redistributes_then_falls() {
    let mut world = world();
    let stale: Vec<Vec3> = world.rain().particles().iter().map(|p| p.position).collect();

    world.set_rain_enabled(true);
    let fresh: Vec<Vec3> = world.rain().particles().iter().map(|p| p.position).collect();
    assert_ne!(stale, fresh);
    assert!(world.rain().is_visible());

    for _ in 0..200 {
        world.on_tick(0.016);
        for p in world.rain().particles() {
            assert!((0.0..=RAIN_CEILING).contains(&p.position.y));
            assert!(p.position.x.abs() <= 100.0 && p.position.z.abs() <= 100.0);
        }
    }
}

#[test]
fn test_click_hits_nearest_creature_only() {
    let mut world = world();
    world.world.insert_resource(Creatures::from_placements(
        &[
            (CreatureKind::Frog, Vec3::new(0.0, 0.0, 10.0)),
            (CreatureKind::Frog, Vec3::new(0.0, 0.0, 20.0)),
        ],
        seeded_rng(1, "creatures"),
    ));

    let ids: Vec<CreatureId> = world.creatures().iter().map(|c| c.id()).collect();

    let ray = Ray::toward(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO).unwrap();
    assert!(world.on_pointer_click(&ray));
    assert!(world.creatures().get(ids[0]).unwrap().is_moving());
    assert!(!world.creatures().get(ids[1]).unwrap().is_moving());
    assert_eq!(world.drain_sounds(), vec![SoundCue::FrogCall]);

    for _ in 0..70 {
        world.on_tick(1.0 / 60.0);
    }
    assert_eq!(world.creatures().moving_count(), 0);
    assert_eq!(
        world.creatures().get(ids[0]).unwrap().position,
        Vec3::new(0.0, 0.0, 10.0)
    );
}

#[test]
fn test_click_on_empty_sky_misses() {
    let mut world = world();
    let ray = Ray::new(Vec3::new(0.0, 500.0, 0.0), Vec3::Y).unwrap();
    assert!(!world.on_pointer_click(&ray));
    assert!(world.drain_sounds().is_empty());
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = small_config();
    config.terrain.segments = 0;
    assert!(matches!(
        GladeWorld::new(&config),
        Err(WorldError::Terrain(_))
    ));

    let mut config = small_config();
    config.clock.hours_per_second = f32::NAN;
    assert!(matches!(
        GladeWorld::new(&config),
        Err(WorldError::InvalidConfig(_))
    ));
}

#[test]
fn test_same_seed_same_world() {
    let a = world();
    let b = world();
    assert_eq!(a.terrain().trees(), b.terrain().trees());
    let pa: Vec<Vec3> = a.creatures().iter().map(|c| c.position).collect();
    let pb: Vec<Vec3> = b.creatures().iter().map(|c| c.position).collect();
    assert_eq!(pa, pb);
}

#[test]
fn test_set_hour_updates_lighting_without_tick() {
    let mut world = world();
    assert!(world.celestial().is_day);

    world.set_hour(0.0);
    let state = world.celestial();
    assert_eq!(state.hour, world.clock().hour());
    assert!(!state.is_day);
    assert_eq!(state.star_opacity, 1.0);
    assert!((state.moon_position - Vec3::new(0.0, 100.0, 0.0)).length() < 1e-3);
}

#[test]
fn test_non_finite_clock_config_is_rejected() {
    let mut config = small_config();
    config.clock.start_hour = f32::NAN;
    assert!(matches!(
        GladeWorld::new(&config),
        Err(WorldError::InvalidConfig(_))
    ));

    let mut config = small_config();
    config.clock.speed_multiplier = f32::INFINITY;
    assert!(matches!(
        GladeWorld::new(&config),
        Err(WorldError::InvalidConfig(_))
    ));
}

#[test]
fn test_huge_frame_delta_keeps_hour_in_range() {
    let mut config = small_config();
    config.clock.speed_multiplier = 10.0;
    config.clock.hours_per_second = 1.0;
    let mut world = GladeWorld::new(&config).unwrap();

    world.on_tick(f32::MAX);
    world.on_tick(0.5);
    let hour = world.clock().hour();
    assert!((0.0..24.0).contains(&hour), "hour {hour}");
    assert_eq!(world.celestial().hour, hour);
}

#[test]
fn test_helper_visibility_toggle() {
    let mut world = world();
    let id = world.create_light(LightKind::Directional, None);
    assert!(world.registry().light(id).unwrap().helper.visible);

    assert!(world.set_light_helper_visible(id, false));
    assert!(!world.registry().light(id).unwrap().helper.visible);
    assert!(world.remove_light(id));
    assert!(!world.set_light_helper_visible(id, true));
}

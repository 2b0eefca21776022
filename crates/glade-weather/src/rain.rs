//! Rain particle buffer.
//!
//! The buffer is allocated once and never resized. Particles that fall through
//! the ground are respawned at the ceiling in place.

use bevy_ecs::prelude::*;
use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Height at which particles spawn.
pub const RAIN_CEILING: f32 = 100.0;
/// Particles spawn with `x, z` in `[-RAIN_HALF_EXTENT, RAIN_HALF_EXTENT]`.
pub const RAIN_HALF_EXTENT: f32 = 100.0;
/// Lowest accepted fall-speed multiplier.
pub const MIN_RAIN_INTENSITY: f32 = 0.1;
/// Highest accepted fall-speed multiplier.
pub const MAX_RAIN_INTENSITY: f32 = 3.0;

const FALL_SPEED_RANGE: std::ops::RangeInclusive<f32> = 0.5..=1.0;

/// One drop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainParticle {
    /// Current position; `y` is always in `[0, RAIN_CEILING]`.
    pub position: Vec3,
    /// World units fallen per tick at intensity 1.
    pub fall_speed: f32,
}

/// User-tunable rain appearance and speed.
#[derive(Clone, Debug, PartialEq)]
pub struct RainSettings {
    /// Fall-speed multiplier in `[MIN_RAIN_INTENSITY, MAX_RAIN_INTENSITY]`.
    pub intensity: f32,
    /// Linear RGB drop color.
    pub color: [f32; 3],
    /// Drop opacity.
    pub opacity: f32,
    /// Rendered drop size.
    pub drop_size: f32,
}

impl Default for RainSettings {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            color: [0.67, 0.67, 0.67],
            opacity: 0.6,
            drop_size: 0.1,
        }
    }
}

/// Fixed-size rain particle system.
#[derive(Resource)]
pub struct RainField {
    particles: Vec<RainParticle>,
    enabled: bool,
    /// Appearance and speed, editable between ticks.
    pub settings: RainSettings,
    rng: ChaCha8Rng,
}

impl RainField {
    /// Allocate `count` particles scattered through the rain volume.
    pub fn new(count: usize, settings: RainSettings, enabled: bool, mut rng: ChaCha8Rng) -> Self {
        let particles = (0..count)
            .map(|_| RainParticle {
                position: random_volume_point(&mut rng),
                fall_speed: rng.random_range(FALL_SPEED_RANGE),
            })
            .collect();

        Self {
            particles,
            enabled,
            settings,
            rng,
        }
    }

    /// Whether rain is falling.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a renderer should draw the particles.
    pub fn is_visible(&self) -> bool {
        self.enabled
    }

    /// Turn rain on or off.
    ///
    /// Turning it on scatters every particle through the full volume first, so
    /// stale positions from the last shower never show.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled == self.enabled {
            return;
        }
        if enabled {
            self.redistribute();
        }
        self.enabled = enabled;
        debug!(enabled, particles = self.particles.len(), "rain toggled");
    }

    /// Move every particle to a fresh uniform position in the rain volume.
    pub fn redistribute(&mut self) {
        for particle in &mut self.particles {
            particle.position = random_volume_point(&mut self.rng);
        }
    }

    /// Advance one tick. Returns how many particles respawned.
    ///
    /// Does nothing while disabled.
    pub fn step(&mut self) -> usize {
        if !self.enabled {
            return 0;
        }
        let intensity = self.settings.intensity;
        let mut respawned = 0;
        for particle in &mut self.particles {
            let y = particle.position.y - particle.fall_speed * intensity;
            if y < 0.0 {
                particle.position = Vec3::new(
                    self.rng.random_range(-RAIN_HALF_EXTENT..=RAIN_HALF_EXTENT),
                    RAIN_CEILING,
                    self.rng.random_range(-RAIN_HALF_EXTENT..=RAIN_HALF_EXTENT),
                );
                respawned += 1;
            } else {
                particle.position.y = y;
            }
        }
        respawned
    }

    /// All particles, in buffer order.
    pub fn particles(&self) -> &[RainParticle] {
        &self.particles
    }

    /// Buffer length. Never changes.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns `true` if the buffer holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

fn random_volume_point(rng: &mut ChaCha8Rng) -> Vec3 {
    Vec3::new(
        rng.random_range(-RAIN_HALF_EXTENT..=RAIN_HALF_EXTENT),
        rng.random_range(0.0..=RAIN_CEILING),
        rng.random_range(-RAIN_HALF_EXTENT..=RAIN_HALF_EXTENT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn field(count: usize, enabled: bool) -> RainField {
        RainField::new(
            count,
            RainSettings::default(),
            enabled,
            ChaCha8Rng::seed_from_u64(17),
        )
    }

    fn in_volume(p: &RainParticle) -> bool {
        (0.0..=RAIN_CEILING).contains(&p.position.y)
            && p.position.x.abs() <= RAIN_HALF_EXTENT
            && p.position.z.abs() <= RAIN_HALF_EXTENT
    }

    #[test]
    fn test_particles_stay_in_bounds_over_many_ticks() {
        let mut rain = field(500, true);
        rain.settings.intensity = MAX_RAIN_INTENSITY;
        for _ in 0..400 {
            rain.step();
            assert!(rain.particles().iter().all(in_volume));
        }
        assert_eq!(rain.len(), 500);
    }

    #[test]
    fn test_particle_below_ground_respawns_at_ceiling() {
        let mut rain = field(64, true);
        // Fall until every particle has wrapped at least once.
        let mut total = 0;
        for _ in 0..250 {
            let before: Vec<RainParticle> = rain.particles().to_vec();
            total += rain.step();
            for (old, new) in before.iter().zip(rain.particles()) {
                if old.position.y - old.fall_speed * rain.settings.intensity < 0.0 {
                    assert_eq!(new.position.y, RAIN_CEILING);
                    assert!(in_volume(new));
                } else {
                    assert!(new.position.y < old.position.y);
                    assert_eq!((new.position.x, new.position.z), (old.position.x, old.position.z));
                }
            }
        }
        assert!(total >= 64);
    }

    #[test]
    fn test_disabled_rain_does_not_move() {
        let mut rain = field(32, false);
        let before: Vec<RainParticle> = rain.particles().to_vec();
        assert_eq!(rain.step(), 0);
        assert_eq!(rain.particles(), before.as_slice());
        assert!(!rain.is_visible());
    }

    #[test]
    fn test_reenable_redistributes_every_particle() {
        let mut rain = field(200, true);
        for _ in 0..120 {
            rain.step();
        }
        rain.set_enabled(false);
        let stale: Vec<RainParticle> = rain.particles().to_vec();

        rain.set_enabled(true);
        assert!(rain.is_visible());
        for (old, new) in stale.iter().zip(rain.particles()) {
            assert_ne!(old.position, new.position);
            assert!(in_volume(new));
            assert_eq!(old.fall_speed, new.fall_speed);
        }
    }

    #[test]
    fn test_enable_when_already_enabled_keeps_positions() {
        let mut rain = field(16, true);
        let before: Vec<RainParticle> = rain.particles().to_vec();
        rain.set_enabled(true);
        assert_eq!(rain.particles(), before.as_slice());
    }

    #[test]
    fn test_intensity_scales_fall_distance() {
        let mut slow = field(1, true);
        let mut fast = field(1, true);
        fast.settings.intensity = 2.0;
        // Same seed, same starting particle.
        let start = slow.particles()[0];
        if start.position.y > 2.0 * start.fall_speed * 2.0 {
            slow.step();
            fast.step();
            let slow_drop = start.position.y - slow.particles()[0].position.y;
            let fast_drop = start.position.y - fast.particles()[0].position.y;
            assert!((fast_drop - 2.0 * slow_drop).abs() < 1e-4);
        }
    }
}

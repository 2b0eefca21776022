//! Wind-drifted clouds.

use bevy_ecs::prelude::*;
use glam::Vec3;
use rand::Rng;

/// Clouds drift within `x ∈ [-CLOUD_HALF_EXTENT, CLOUD_HALF_EXTENT]`.
pub const CLOUD_HALF_EXTENT: f32 = 100.0;

/// One sphere of a cloud, relative to the cloud's origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Puff {
    /// Offset from the cloud position.
    pub offset: Vec3,
    /// Sphere radius.
    pub radius: f32,
}

/// A cluster of puffs moved as one transform.
#[derive(Clone, Debug, PartialEq)]
pub struct Cloud {
    /// Group position.
    pub position: Vec3,
    /// Cosmetic shape.
    pub puffs: Vec<Puff>,
}

impl Cloud {
    /// A cloud with a single unit puff, mostly useful for tests and presets.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            puffs: vec![Puff {
                offset: Vec3::ZERO,
                radius: 1.0,
            }],
        }
    }

    fn random<R: Rng>(rng: &mut R) -> Self {
        let position = Vec3::new(
            rng.random_range(-CLOUD_HALF_EXTENT..=CLOUD_HALF_EXTENT),
            rng.random_range(40.0..=60.0),
            rng.random_range(-CLOUD_HALF_EXTENT..=CLOUD_HALF_EXTENT),
        );
        let puff_count = rng.random_range(3..=6);
        let puffs = (0..puff_count)
            .map(|_| Puff {
                offset: Vec3::new(
                    rng.random_range(-5.0..=5.0),
                    rng.random_range(-1.5..=1.5),
                    rng.random_range(-3.0..=3.0),
                ),
                radius: rng.random_range(3.0..=6.0),
            })
            .collect();
        Self { position, puffs }
    }

    /// Move by `dx` along X, wrapping to the opposite edge when leaving the band.
    pub fn drift(&mut self, dx: f32) {
        self.position.x += dx;
        if self.position.x > CLOUD_HALF_EXTENT {
            self.position.x = -CLOUD_HALF_EXTENT;
        } else if self.position.x < -CLOUD_HALF_EXTENT {
            self.position.x = CLOUD_HALF_EXTENT;
        }
    }
}

/// Every cloud in the sky plus the wind that moves them.
#[derive(Resource, Clone, Debug)]
pub struct CloudLayer {
    clouds: Vec<Cloud>,
    /// Drift speed in world units per second along +X.
    pub wind_speed: f32,
}

impl CloudLayer {
    /// Scatter `count` random clouds.
    pub fn scatter<R: Rng>(count: usize, wind_speed: f32, rng: &mut R) -> Self {
        let clouds = (0..count).map(|_| Cloud::random(rng)).collect();
        Self { clouds, wind_speed }
    }

    /// Build a layer from explicit clouds.
    pub fn from_clouds(clouds: Vec<Cloud>, wind_speed: f32) -> Self {
        Self { clouds, wind_speed }
    }

    /// Advance every cloud by `wind_speed * delta_seconds`.
    pub fn step(&mut self, delta_seconds: f32) {
        let dx = self.wind_speed * delta_seconds;
        if dx == 0.0 {
            return;
        }
        for cloud in &mut self.clouds {
            cloud.drift(dx);
        }
    }

    /// All clouds.
    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }
}

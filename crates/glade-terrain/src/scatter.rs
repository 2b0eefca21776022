//! Decorative tree scatter around the origin.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::TerrainError;

/// Where and how many trees to place.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterParams {
    /// Number of trees.
    pub count: u32,
    /// Inner radius of the placement ring.
    pub min_radius: f32,
    /// Outer radius of the placement ring.
    pub max_radius: f32,
    /// Uniform scale range `(min, max)`.
    pub scale_range: (f32, f32),
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            count: 50,
            min_radius: 20.0,
            max_radius: 80.0,
            scale_range: (0.8, 1.2),
        }
    }
}

impl ScatterParams {
    /// Reject inverted or negative ranges.
    pub fn validate(&self) -> Result<(), TerrainError> {
        let (lo, hi) = self.scale_range;
        if self.min_radius < 0.0 || self.min_radius > self.max_radius || lo > hi || lo <= 0.0 {
            return Err(TerrainError::InvalidScatterRange {
                min_radius: self.min_radius,
                max_radius: self.max_radius,
            });
        }
        Ok(())
    }
}

/// One placed tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeInstance {
    /// Base of the trunk, resting on the surface.
    pub position: Vec3,
    /// Uniform scale.
    pub scale: f32,
    /// Rotation about +Y in radians.
    pub rotation_y: f32,
}

/// Shared trunk + foliage shape every tree instance is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeModel {
    /// Trunk cylinder radius.
    pub trunk_radius: f32,
    /// Trunk cylinder height.
    pub trunk_height: f32,
    /// Trunk linear RGB color.
    pub trunk_color: [f32; 3],
    /// Foliage cone base radius.
    pub foliage_radius: f32,
    /// Foliage cone height, stacked on top of the trunk.
    pub foliage_height: f32,
    /// Foliage linear RGB color.
    pub foliage_color: [f32; 3],
}

impl Default for TreeModel {
    fn default() -> Self {
        Self {
            trunk_radius: 0.2,
            trunk_height: 2.0,
            trunk_color: [0.545, 0.271, 0.075],
            foliage_radius: 1.5,
            foliage_height: 3.0,
            foliage_color: [0.133, 0.545, 0.133],
        }
    }
}

impl TreeModel {
    /// Total unscaled height from trunk base to foliage tip.
    pub fn height(&self) -> f32 {
        self.trunk_height + self.foliage_height
    }
}

/// Place `params.count` trees uniformly in angle and radius on a ring, each
/// resting at `ground(x, z)`.
pub fn scatter_trees<R: Rng>(
    rng: &mut R,
    params: &ScatterParams,
    ground: impl Fn(f32, f32) -> f32,
) -> Vec<TreeInstance> {
    let (scale_lo, scale_hi) = params.scale_range;
    (0..params.count)
        .map(|_| {
            let angle = rng.random_range(0.0..TAU);
            let radius = rng.random_range(params.min_radius..=params.max_radius);
            let x = angle.cos() * radius;
            let z = angle.sin() * radius;
            TreeInstance {
                position: Vec3::new(x, ground(x, z), z),
                scale: rng.random_range(scale_lo..=scale_hi),
                rotation_y: rng.random_range(0.0..TAU),
            }
        })
        .collect()
}

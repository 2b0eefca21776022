//! Procedural terrain: layered noise heightfield, flat fallback ground, and tree scatter.
//!
//! Everything here is built once by [`TerrainBuilder::build`] and never changes
//! afterwards.

mod heightfield;
mod noise_field;
mod scatter;

use glade_ecs::seeded_rng;
use tracing::info;

pub use heightfield::{Heightfield, HeightfieldParams, surface_height};
pub use noise_field::{DEFAULT_OCTAVES, NoiseField, Octave, max_amplitude};
pub use scatter::{ScatterParams, TreeInstance, TreeModel, scatter_trees};

/// Errors returned when terrain parameters cannot produce a mesh.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// The grid has no cells.
    #[error("heightfield needs at least one segment per side")]
    ZeroSegments,

    /// The grid extent is zero, negative, or not finite.
    #[error("invalid terrain extent: {0}")]
    InvalidExtent(f32),

    /// The tree ring or scale range is inverted or negative.
    #[error("invalid tree scatter range: radius {min_radius}..{max_radius}")]
    InvalidScatterRange {
        /// Requested inner radius.
        min_radius: f32,
        /// Requested outer radius.
        max_radius: f32,
    },
}

/// Flat plane under the heightfield, used as a render/collision fallback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundPlane {
    /// Side length.
    pub size: f32,
    /// Elevation of the plane.
    pub elevation: f32,
    /// Linear RGB color.
    pub color: [f32; 3],
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self {
            size: 200.0,
            elevation: 0.0,
            color: [0.2, 0.55, 0.2],
        }
    }
}

/// Inputs for a single terrain build.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TerrainParams {
    /// Noise seed; also seeds the tree scatter stream.
    pub seed: u64,
    /// Fallback ground plane.
    pub ground: GroundPlane,
    /// Heightfield grid and octaves.
    pub heightfield: HeightfieldParams,
    /// Tree placement.
    pub trees: ScatterParams,
}

/// Builds a [`Terrain`] from [`TerrainParams`].
pub struct TerrainBuilder {
    params: TerrainParams,
}

impl TerrainBuilder {
    /// Create a builder for the given parameters.
    pub fn new(params: TerrainParams) -> Self {
        Self { params }
    }

    /// Generate the heightfield and scatter trees on it.
    pub fn build(self) -> Result<Terrain, TerrainError> {
        let params = self.params;
        params.heightfield.validate()?;
        params.trees.validate()?;

        let noise = NoiseField::new(params.seed);
        let heightfield = Heightfield::generate(&noise, &params.heightfield)?;

        let octaves = params.heightfield.octaves.clone();
        let mut rng = seeded_rng(params.seed, "trees");
        let trees = scatter_trees(&mut rng, &params.trees, |x, z| {
            surface_height(&noise, &octaves, x, z)
        });

        let (lo, hi) = heightfield.height_range();
        info!(
            seed = params.seed,
            vertices = heightfield.positions().len(),
            trees = trees.len(),
            min_height = lo,
            max_height = hi,
            amplitude_bound = max_amplitude(&octaves),
            "terrain built"
        );

        Ok(Terrain {
            ground: params.ground,
            heightfield,
            trees,
            tree_model: TreeModel::default(),
            noise,
            octaves,
        })
    }
}

/// The finished, immutable terrain.
pub struct Terrain {
    ground: GroundPlane,
    heightfield: Heightfield,
    trees: Vec<TreeInstance>,
    tree_model: TreeModel,
    noise: NoiseField,
    octaves: Vec<Octave>,
}

impl Terrain {
    /// Surface elevation at any `(x, z)`, on or off the grid.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        surface_height(&self.noise, &self.octaves, x, z)
    }

    /// Flat fallback plane.
    pub fn ground(&self) -> &GroundPlane {
        &self.ground
    }

    /// Displaced mesh.
    pub fn heightfield(&self) -> &Heightfield {
        &self.heightfield
    }

    /// Placed trees.
    pub fn trees(&self) -> &[TreeInstance] {
        &self.trees
    }

    /// Shape shared by every tree.
    pub fn tree_model(&self) -> &TreeModel {
        &self.tree_model
    }

    /// Noise seed.
    pub fn seed(&self) -> u64 {
        self.noise.seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_params(seed: u64) -> TerrainParams {
        TerrainParams {
            seed,
            heightfield: HeightfieldParams {
                segments: 16,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = TerrainBuilder::new(quick_params(8)).build().unwrap();
        let b = TerrainBuilder::new(quick_params(8)).build().unwrap();
        assert_eq!(a.heightfield().positions(), b.heightfield().positions());
        assert_eq!(a.trees(), b.trees());
    }

    #[test]
    fn test_trees_sit_on_surface() {
        let terrain = TerrainBuilder::new(quick_params(3)).build().unwrap();
        assert_eq!(terrain.trees().len(), 50);
        for tree in terrain.trees() {
            let h = terrain.height_at(tree.position.x, tree.position.z);
            assert_eq!(tree.position.y, h);
        }
    }

    #[test]
    fn test_height_at_matches_grid_vertices() {
        let terrain = TerrainBuilder::new(quick_params(12)).build().unwrap();
        for p in terrain.heightfield().positions().iter().step_by(7) {
            assert_eq!(terrain.height_at(p.x, p.z), p.y);
        }
    }

    #[test]
    fn test_invalid_scatter_fails_build() {
        let mut params = quick_params(1);
        params.trees.min_radius = 100.0;
        params.trees.max_radius = 5.0;
        let result = TerrainBuilder::new(params).build();
        assert!(matches!(
            result,
            Err(TerrainError::InvalidScatterRange { .. })
        ));
    }

    #[test]
    fn test_negative_extent_fails_build() {
        let mut params = quick_params(1);
        params.heightfield.size = -1.0;
        assert!(matches!(
            TerrainBuilder::new(params).build(),
            Err(TerrainError::InvalidExtent(_))
        ));
    }
}

//! Heightfield mesh: a square vertex grid displaced by layered noise.

use glam::Vec3;

use crate::TerrainError;
use crate::noise_field::{NoiseField, Octave};

/// Grid dimensions and the octaves that displace it.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightfieldParams {
    /// Side length of the square grid in world units, centered on the origin.
    pub size: f32,
    /// Cells per side. The mesh has `(segments + 1)^2` vertices.
    pub segments: u32,
    /// Noise layers summed into each vertex height.
    pub octaves: Vec<Octave>,
}

impl Default for HeightfieldParams {
    fn default() -> Self {
        Self {
            size: 200.0,
            segments: 128,
            octaves: crate::DEFAULT_OCTAVES.to_vec(),
        }
    }
}

impl HeightfieldParams {
    /// Reject grids that cannot produce a mesh.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.segments == 0 {
            return Err(TerrainError::ZeroSegments);
        }
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(TerrainError::InvalidExtent(self.size));
        }
        Ok(())
    }
}

/// Height of the surface at `(x, z)`: a pure function of position, octaves, and seed.
pub fn surface_height(noise: &NoiseField, octaves: &[Octave], x: f32, z: f32) -> f32 {
    noise.layered(f64::from(x), f64::from(z), octaves) as f32
}

/// Triangle mesh of the displaced grid.
///
/// Vertices are stored row-major: row index runs along +Z, column index along +X.
#[derive(Clone, Debug)]
pub struct Heightfield {
    size: f32,
    segments: u32,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
}

impl Heightfield {
    /// Sample every grid vertex and compute smooth normals.
    pub fn generate(noise: &NoiseField, params: &HeightfieldParams) -> Result<Self, TerrainError> {
        params.validate()?;

        let row_len = params.segments as usize + 1;
        let half = params.size * 0.5;
        let step = params.size / params.segments as f32;

        let mut positions = Vec::with_capacity(row_len * row_len);
        for row in 0..row_len {
            let z = -half + row as f32 * step;
            for col in 0..row_len {
                let x = -half + col as f32 * step;
                let y = surface_height(noise, &params.octaves, x, z);
                positions.push(Vec3::new(x, y, z));
            }
        }

        let indices = grid_indices(params.segments);
        let normals = compute_vertex_normals(&positions, &indices);

        Ok(Self {
            size: params.size,
            segments: params.segments,
            positions,
            normals,
            indices,
        })
    }

    /// Side length in world units.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Cells per side.
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Vertices per row (`segments + 1`).
    pub fn row_len(&self) -> usize {
        self.segments as usize + 1
    }

    /// Vertex positions, row-major.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Unit vertex normals, parallel to [`positions`](Self::positions).
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Triangle list, counter-clockwise seen from above.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertex at grid coordinate `(col, row)`, if in range.
    pub fn vertex(&self, col: usize, row: usize) -> Option<Vec3> {
        let row_len = self.row_len();
        if col >= row_len || row >= row_len {
            return None;
        }
        self.positions.get(row * row_len + col).copied()
    }

    /// Lowest and highest vertex elevation.
    pub fn height_range(&self) -> (f32, f32) {
        self.positions
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            })
    }
}

fn grid_indices(segments: u32) -> Vec<u32> {
    let row_len = segments + 1;
    let mut indices = Vec::with_capacity(segments as usize * segments as usize * 6);
    for row in 0..segments {
        for col in 0..segments {
            let a = row * row_len + col;
            let b = a + 1;
            let c = a + row_len;
            let d = c + 1;
            indices.extend_from_slice(&[a, c, b, b, c, d]);
        }
    }
    indices
}

/// Area-weighted smooth normals: each face normal is added unnormalized to its
/// three corners, then every sum is normalized.
fn compute_vertex_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    normals
        .into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_params(octaves: Vec<Octave>) -> HeightfieldParams {
        HeightfieldParams {
            size: 20.0,
            segments: 8,
            octaves,
        }
    }

    #[test]
    fn test_vertex_and_index_counts() {
        let noise = NoiseField::new(1);
        let field = Heightfield::generate(&noise, &small_params(vec![])).unwrap();
        assert_eq!(field.positions().len(), 81);
        assert_eq!(field.normals().len(), 81);
        assert_eq!(field.indices().len(), 8 * 8 * 6);
    }

    #[test]
    fn test_default_grid_is_128_segments_over_200() {
        let params = HeightfieldParams::default();
        assert_eq!(params.segments, 128);
        assert_eq!(params.size, 200.0);

        let noise = NoiseField::new(9);
        let field = Heightfield::generate(&noise, &params).unwrap();
        assert_eq!(field.positions().len(), 129 * 129);
        let corner = field.vertex(0, 0).unwrap();
        assert_eq!((corner.x, corner.z), (-100.0, -100.0));
        let far = field.vertex(128, 128).unwrap();
        assert!((far.x - 100.0).abs() < 1e-3 && (far.z - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_flat_field_has_up_normals() {
        let noise = NoiseField::new(1);
        let field = Heightfield::generate(&noise, &small_params(vec![])).unwrap();
        for n in field.normals() {
            assert!((*n - Vec3::Y).length() < 1e-6, "flat normal {n:?}");
        }
        assert_eq!(field.height_range(), (0.0, 0.0));
    }

    #[test]
    fn test_vertex_heights_match_surface_function() {
        let noise = NoiseField::new(21);
        let params = small_params(crate::DEFAULT_OCTAVES.to_vec());
        let field = Heightfield::generate(&noise, &params).unwrap();

        for p in field.positions() {
            let expected = surface_height(&noise, &params.octaves, p.x, p.z);
            assert_eq!(p.y, expected);
        }
    }

    #[test]
    fn test_normals_are_unit_and_face_upward() {
        let noise = NoiseField::new(4);
        let field = Heightfield::generate(&noise, &HeightfieldParams::default()).unwrap();
        for n in field.normals() {
            assert!((n.length() - 1.0).abs() < 1e-4);
            assert!(n.y > 0.0, "terrain normal points down: {n:?}");
        }
    }

    #[test]
    fn test_same_seed_same_mesh() {
        let params = small_params(crate::DEFAULT_OCTAVES.to_vec());
        let a = Heightfield::generate(&NoiseField::new(3), &params).unwrap();
        let b = Heightfield::generate(&NoiseField::new(3), &params).unwrap();
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn test_zero_segments_rejected() {
        let params = HeightfieldParams {
            segments: 0,
            ..Default::default()
        };
        let result = Heightfield::generate(&NoiseField::new(0), &params);
        assert!(matches!(result, Err(TerrainError::ZeroSegments)));
    }

    #[test]
    fn test_vertex_out_of_range() {
        let noise = NoiseField::new(1);
        let field = Heightfield::generate(&noise, &small_params(vec![])).unwrap();
        assert!(field.vertex(9, 0).is_none());
        assert!(field.vertex(8, 8).is_some());
    }
}

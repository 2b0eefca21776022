//! Deterministic layered 2D noise.
//!
//! [`NoiseField::sample`] is a pure function of `(x, z)` and the seed. Terrain
//! height is the sum of a few [`Octave`]s, each sampling the same field at its
//! own frequency and scaling the result by its amplitude.

use noise::{NoiseFn, Perlin};

/// One frequency/amplitude layer of composite noise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Octave {
    /// Spatial frequency in cycles per world unit.
    pub frequency: f64,
    /// Peak height contribution in world units.
    pub amplitude: f64,
}

impl Octave {
    /// Create an octave from a frequency and amplitude.
    pub const fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

/// Rolling hills, medium bumps, fine detail.
pub const DEFAULT_OCTAVES: [Octave; 3] = [
    Octave::new(0.01, 10.0),
    Octave::new(0.05, 5.0),
    Octave::new(0.1, 2.0),
];

/// Seeded gradient-noise sampler.
pub struct NoiseField {
    noise: Perlin,
    seed: u64,
}

impl NoiseField {
    /// Create a field for the given seed.
    pub fn new(seed: u64) -> Self {
        // Perlin takes a 32-bit seed; fold the high bits in rather than dropping them.
        let folded = (seed ^ (seed >> 32)) as u32;
        Self {
            noise: Perlin::new(folded),
            seed,
        }
    }

    /// Raw noise at `(x, z)`, in `[-1, 1]`.
    pub fn sample(&self, x: f64, z: f64) -> f64 {
        self.noise.get([x, z]).clamp(-1.0, 1.0)
    }

    /// Sum of `sample(x * frequency, z * frequency) * amplitude` over `octaves`.
    pub fn layered(&self, x: f64, z: f64, octaves: &[Octave]) -> f64 {
        octaves
            .iter()
            .map(|o| self.sample(x * o.frequency, z * o.frequency) * o.amplitude)
            .sum()
    }

    /// The seed this field was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// Upper bound on `|layered(..)|` for the given octaves.
pub fn max_amplitude(octaves: &[Octave]) -> f64 {
    octaves.iter().map(|o| o.amplitude.abs()).sum()
}

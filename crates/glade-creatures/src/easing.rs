//! Easing curves.

use std::f32::consts::PI;

/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Slow start, fast end.
    QuadIn,
    /// Fast start, slow end.
    QuadOut,
    /// Slow start, fast middle, slow end.
    QuadInOut,
    /// Sinusoidal in-out, used for oscillations.
    SineInOut,
    /// Overshoots the end and settles in decaying bounces.
    BounceOut,
}

impl Easing {
    /// Map a linear progress value (clamped to `0.0..=1.0`) to an eased value.
    ///
    /// Every curve maps 0 to 0 and 1 to 1 and stays within `[0, 1]`.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::BounceOut => bounce_out(t),
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        (N * t * t + 0.984375).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::SineInOut,
        Easing::BounceOut,
    ];

    #[test]
    fn test_endpoints_fixed() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_outputs_stay_bounded() {
        for easing in ALL {
            for i in 0..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!((0.0..=1.0).contains(&v), "{easing:?} produced {v}");
            }
        }
    }

    #[test]
    fn test_input_clamped() {
        assert_eq!(Easing::QuadIn.apply(-3.0), 0.0);
        assert_eq!(Easing::QuadOut.apply(7.0), 1.0);
    }

    #[test]
    fn test_in_out_midpoint() {
        assert!((Easing::QuadInOut.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((Easing::SineInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_out_is_not_monotonic() {
        // First impact at t = 1/2.75, then it rises again.
        let impact = Easing::BounceOut.apply(1.0 / 2.75);
        let after = Easing::BounceOut.apply(1.0 / 2.75 + 0.05);
        assert!((impact - 1.0).abs() < 1e-4);
        assert!(after < impact);
    }
}

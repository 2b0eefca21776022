//! Sun, moon, sky, and light levels as a pure function of the hour.

use std::f32::consts::TAU;

use bevy_ecs::prelude::*;
use glam::Vec3;

/// Start of the dawn blend.
const DAWN_START: f32 = 4.0;
/// Sunrise: dawn ends, day begins.
const SUNRISE: f32 = 6.0;
/// Sunset: day ends, dusk begins.
const SUNSET: f32 = 18.0;
/// End of the dusk blend.
const DUSK_END: f32 = 20.0;
/// Hours from peak (noon or midnight) until directional light reaches zero.
const INTENSITY_FALLOFF_HOURS: f32 = 6.0;

/// Lighting regime for a given hour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightingRegime {
    /// `[6, 18)`
    Day,
    /// `[4, 6)`: night blending into day.
    Dawn,
    /// `[18, 20)`: day blending into night.
    Dusk,
    /// Everything else.
    Night,
}

impl LightingRegime {
    /// Classify an hour in `[0, 24)`.
    pub fn at(hour: f32) -> Self {
        if (SUNRISE..SUNSET).contains(&hour) {
            LightingRegime::Day
        } else if (DAWN_START..SUNRISE).contains(&hour) {
            LightingRegime::Dawn
        } else if (SUNSET..DUSK_END).contains(&hour) {
            LightingRegime::Dusk
        } else {
            LightingRegime::Night
        }
    }
}

/// Which body currently drives the directional light.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CelestialBody {
    /// Daytime.
    Sun,
    /// Nighttime.
    Moon,
}

/// Color in hue/saturation/lightness, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// Hue as a fraction of a full turn.
    pub h: f32,
    /// Saturation.
    pub s: f32,
    /// Lightness.
    pub l: f32,
}

impl Hsl {
    /// Create a color from components.
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Convert to RGB in `[0, 1]`.
    pub fn to_rgb(self) -> Vec3 {
        if self.s <= 0.0 {
            return Vec3::splat(self.l);
        }
        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;
        Vec3::new(
            hue_to_channel(p, q, self.h + 1.0 / 3.0),
            hue_to_channel(p, q, self.h),
            hue_to_channel(p, q, self.h - 1.0 / 3.0),
        )
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// Fixed constants of the lighting model.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct CelestialParams {
    /// Radius of the circle the sun and moon travel on.
    pub orbit_radius: f32,
    /// Directional intensity at solar noon.
    pub sun_peak_intensity: f32,
    /// Directional intensity at midnight.
    pub moon_peak_intensity: f32,
    /// Ambient level while `is_day`.
    pub day_ambient: f32,
    /// Ambient level otherwise.
    pub night_ambient: f32,
    /// Sky hue.
    pub sky_hue: f32,
    /// Sky saturation.
    pub sky_saturation: f32,
    /// Sky lightness during the day.
    pub day_lightness: f32,
    /// Sky lightness during the night.
    pub night_lightness: f32,
}

impl Default for CelestialParams {
    fn default() -> Self {
        Self {
            orbit_radius: 100.0,
            sun_peak_intensity: 5.0,
            moon_peak_intensity: 0.5,
            day_ambient: 0.3,
            night_ambient: 0.15,
            sky_hue: 0.6,
            sky_saturation: 0.7,
            day_lightness: 0.55,
            night_lightness: 0.05,
        }
    }
}

/// Everything a renderer needs to light the scene for one hour.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct CelestialState {
    /// Hour this state was derived from.
    pub hour: f32,
    /// Regime the hour falls in.
    pub regime: LightingRegime,
    /// `hour ∈ [6, 18)`.
    pub is_day: bool,
    /// Sun position on the orbit circle.
    pub sun_position: Vec3,
    /// Moon position, opposite the sun.
    pub moon_position: Vec3,
    /// Directional light intensity in `[0, sun_peak_intensity]`.
    pub light_intensity: f32,
    /// Ambient light intensity, one of two fixed levels.
    pub ambient_intensity: f32,
    /// Sky background color.
    pub sky_color: Hsl,
    /// Star field opacity in `[0, 1]`.
    pub star_opacity: f32,
}

impl Default for CelestialState {
    fn default() -> Self {
        Self::from_hour(12.0, &CelestialParams::default())
    }
}

impl CelestialState {
    /// Derive the full lighting state from `hour` alone.
    pub fn from_hour(hour: f32, params: &CelestialParams) -> Self {
        let regime = LightingRegime::at(hour);
        let is_day = regime == LightingRegime::Day;

        let angle = hour / 24.0 * TAU;
        let sun_position = Vec3::new(angle.sin(), -angle.cos(), 0.0) * params.orbit_radius;
        let moon_position = -sun_position;

        let light_intensity = if is_day {
            params.sun_peak_intensity * falloff((hour - 12.0).abs())
        } else {
            let from_midnight = if hour >= 12.0 { 24.0 - hour } else { hour };
            params.moon_peak_intensity * falloff(from_midnight)
        };

        let ambient_intensity = if is_day {
            params.day_ambient
        } else {
            params.night_ambient
        };

        let (lightness, star_opacity) = match regime {
            LightingRegime::Day => (params.day_lightness, 0.0),
            LightingRegime::Night => (params.night_lightness, 1.0),
            LightingRegime::Dawn => {
                let p = (hour - DAWN_START) / (SUNRISE - DAWN_START);
                (lerp(params.night_lightness, params.day_lightness, p), 1.0 - p)
            }
            LightingRegime::Dusk => {
                let p = (hour - SUNSET) / (DUSK_END - SUNSET);
                (lerp(params.day_lightness, params.night_lightness, p), p)
            }
        };

        Self {
            hour,
            regime,
            is_day,
            sun_position,
            moon_position,
            light_intensity,
            ambient_intensity,
            sky_color: Hsl::new(params.sky_hue, params.sky_saturation, lightness),
            star_opacity: star_opacity.clamp(0.0, 1.0),
        }
    }

    /// The body that is visible and drives the directional light.
    pub fn visible_body(&self) -> CelestialBody {
        if self.is_day {
            CelestialBody::Sun
        } else {
            CelestialBody::Moon
        }
    }

    /// Position of the visible body.
    pub fn directional_position(&self) -> Vec3 {
        match self.visible_body() {
            CelestialBody::Sun => self.sun_position,
            CelestialBody::Moon => self.moon_position,
        }
    }
}

fn falloff(hours_from_peak: f32) -> f32 {
    (1.0 - hours_from_peak / INTENSITY_FALLOFF_HOURS).max(0.0)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

//! Light entries and their paired helpers.

use std::f32::consts::PI;

use glam::Vec3;

/// Light type requested at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LightKind {
    /// Infinitely distant, parallel rays.
    Directional,
    /// Omnidirectional from a point.
    Point,
    /// Cone from a point.
    Spot,
}

impl LightKind {
    /// Every kind, in menu order.
    pub const ALL: [LightKind; 3] = [LightKind::Directional, LightKind::Point, LightKind::Spot];

    /// Label used in display names.
    pub fn label(self) -> &'static str {
        match self {
            LightKind::Directional => "Directional Light",
            LightKind::Point => "Point Light",
            LightKind::Spot => "Spot Light",
        }
    }

    /// Size of the paired helper gizmo.
    pub fn helper_size(self) -> f32 {
        match self {
            LightKind::Directional => 5.0,
            LightKind::Point => 1.0,
            LightKind::Spot => 2.0,
        }
    }

    /// Kind-specific fields a freshly created light starts with.
    pub fn default_variant(self) -> LightVariant {
        match self {
            LightKind::Directional => LightVariant::Directional,
            LightKind::Point => LightVariant::Point,
            LightKind::Spot => LightVariant::Spot(SpotParams::default()),
        }
    }
}

/// Cone settings, present on spot lights only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotParams {
    /// Half-angle of the cone in radians, in `(0, PI / 2]`.
    pub angle: f32,
    /// Fraction of the cone that is attenuated at the edge, in `[0, 1]`.
    pub penumbra: f32,
    /// Maximum reach. Zero means unlimited.
    pub range: f32,
}

impl Default for SpotParams {
    fn default() -> Self {
        Self {
            angle: PI / 6.0,
            penumbra: 0.1,
            range: 50.0,
        }
    }
}

/// Kind tag plus the fields only that kind has.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightVariant {
    /// No extra fields.
    Directional,
    /// No extra fields.
    Point,
    /// Cone settings.
    Spot(SpotParams),
}

impl LightVariant {
    /// Plain kind tag.
    pub fn kind(&self) -> LightKind {
        match self {
            LightVariant::Directional => LightKind::Directional,
            LightVariant::Point => LightKind::Point,
            LightVariant::Spot(_) => LightKind::Spot,
        }
    }
}

/// Visual gizmo drawn at the light. Lives and dies with its light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightHelper {
    /// Gizmo shape.
    pub kind: LightKind,
    /// Gizmo size.
    pub size: f32,
    /// Whether the gizmo is drawn.
    pub visible: bool,
}

/// A live light and everything it owns.
#[derive(Clone, Debug, PartialEq)]
pub struct LightEntry {
    /// Display name, e.g. `Point Light 3`.
    pub name: String,
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Intensity multiplier.
    pub intensity: f32,
    /// World position.
    pub position: Vec3,
    /// Kind and kind-specific fields.
    pub variant: LightVariant,
    /// Paired helper.
    pub helper: LightHelper,
}

impl LightEntry {
    /// Plain kind tag.
    pub fn kind(&self) -> LightKind {
        self.variant.kind()
    }

    /// Cone settings, if this is a spot light.
    pub fn spot(&self) -> Option<&SpotParams> {
        match &self.variant {
            LightVariant::Spot(spot) => Some(spot),
            _ => None,
        }
    }

    /// Mutable cone settings, if this is a spot light.
    pub fn spot_mut(&mut self) -> Option<&mut SpotParams> {
        match &mut self.variant {
            LightVariant::Spot(spot) => Some(spot),
            _ => None,
        }
    }
}

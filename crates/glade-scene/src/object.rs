//! Object entries: shape, geometry, material, transform.

use glam::Vec3;

/// Primitive shape requested at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// UV sphere.
    Sphere,
    /// Unit box.
    Cube,
    /// Ring.
    Torus,
    /// Capped cylinder.
    Cylinder,
    /// Capped cone.
    Cone,
}

impl ShapeKind {
    /// Every shape, in menu order.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Sphere,
        ShapeKind::Cube,
        ShapeKind::Torus,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
    ];

    /// Label used in display names.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cube => "Cube",
            ShapeKind::Torus => "Torus",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Cone => "Cone",
        }
    }
}

/// Geometry descriptor a renderer builds a mesh from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    /// Sphere tessellated into latitude/longitude bands.
    Sphere {
        /// Radius.
        radius: f32,
        /// Longitude segments.
        width_segments: u32,
        /// Latitude segments.
        height_segments: u32,
    },
    /// Axis-aligned box.
    Cube {
        /// Extents along X, Y, Z.
        size: Vec3,
    },
    /// Ring around the Z axis.
    Torus {
        /// Distance from the center to the tube center.
        radius: f32,
        /// Tube radius.
        tube: f32,
        /// Segments around the tube.
        radial_segments: u32,
        /// Segments around the ring.
        tubular_segments: u32,
    },
    /// Cylinder along Y.
    Cylinder {
        /// Top cap radius.
        radius_top: f32,
        /// Bottom cap radius.
        radius_bottom: f32,
        /// Height.
        height: f32,
        /// Segments around the axis.
        radial_segments: u32,
    },
    /// Cone along Y.
    Cone {
        /// Base radius.
        radius: f32,
        /// Height.
        height: f32,
        /// Segments around the axis.
        radial_segments: u32,
    },
}

impl Geometry {
    /// Default geometry for a shape.
    pub fn for_shape(shape: ShapeKind) -> Self {
        match shape {
            ShapeKind::Sphere => Geometry::Sphere {
                radius: 1.0,
                width_segments: 32,
                height_segments: 16,
            },
            ShapeKind::Cube => Geometry::Cube { size: Vec3::ONE },
            ShapeKind::Torus => Geometry::Torus {
                radius: 1.0,
                tube: 0.4,
                radial_segments: 16,
                tubular_segments: 100,
            },
            ShapeKind::Cylinder => Geometry::Cylinder {
                radius_top: 1.0,
                radius_bottom: 1.0,
                height: 2.0,
                radial_segments: 32,
            },
            ShapeKind::Cone => Geometry::Cone {
                radius: 1.0,
                height: 2.0,
                radial_segments: 32,
            },
        }
    }
}

/// Physically based surface parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Linear RGB base color.
    pub color: [f32; 3],
    /// Roughness in `[0, 1]`.
    pub roughness: f32,
    /// Metalness in `[0, 1]`.
    pub metalness: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: [0.5, 0.5, 0.5],
            roughness: 0.5,
            metalness: 0.5,
        }
    }
}

/// Position, Euler rotation (radians, XYZ order), and per-axis scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// World position.
    pub position: Vec3,
    /// Euler angles in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// A live object.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectEntry {
    /// Display name, e.g. `Torus 2`.
    pub name: String,
    /// Shape tag.
    pub shape: ShapeKind,
    /// Mesh descriptor.
    pub geometry: Geometry,
    /// Surface.
    pub material: Material,
    /// Placement.
    pub transform: Transform,
}

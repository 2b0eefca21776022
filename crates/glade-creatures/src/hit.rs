//! Pointer rays and sphere hit proxies.

use glam::Vec3;

/// A half-line from a pointer into the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`. Returns `None` for a zero direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        direction.try_normalize().map(|direction| Self { origin, direction })
    }

    /// Ray from `origin` through `target`.
    pub fn toward(origin: Vec3, target: Vec3) -> Option<Self> {
        Self::new(origin, target - origin)
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Sphere used for hit-testing a creature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingSphere {
    /// Center in world space.
    pub center: Vec3,
    /// Radius.
    pub radius: f32,
}

impl BoundingSphere {
    /// Distance along `ray` to the first surface point in front of the origin.
    ///
    /// A ray starting inside the sphere hits at distance 0.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;
        if c <= 0.0 {
            return Some(0.0);
        }
        // Origin outside and pointing away.
        if b > 0.0 {
            return None;
        }
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        Some(-b - discriminant.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_at(center: Vec3) -> BoundingSphere {
        BoundingSphere {
            center,
            radius: 1.0,
        }
    }

    #[test]
    fn test_head_on_hit_distance() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();
        let hit = unit_sphere_at(Vec3::new(0.0, 0.0, 10.0)).intersect(&ray);
        assert!((hit.unwrap() - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_miss_to_the_side() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();
        assert!(unit_sphere_at(Vec3::new(3.0, 0.0, 10.0)).intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin_is_missed() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();
        assert!(unit_sphere_at(Vec3::new(0.0, 0.0, -5.0)).intersect(&ray).is_none());
    }

    #[test]
    fn test_origin_inside_hits_at_zero() {
        let ray = Ray::new(Vec3::new(0.2, 0.0, 0.0), Vec3::X).unwrap();
        assert_eq!(unit_sphere_at(Vec3::ZERO).intersect(&ray), Some(0.0));
    }

    #[test]
    fn test_zero_direction_rejected() {
        assert!(Ray::new(Vec3::ONE, Vec3::ZERO).is_none());
        let ray = Ray::toward(Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0)).unwrap();
        assert_eq!(ray.at(2.0), Vec3::new(0.0, 0.0, 2.0));
    }
}

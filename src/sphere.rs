//! Sphere primitive for ray casting.
//!
//! Implements ray-sphere intersection using the half-b quadratic formula.

use glam::Vec3A;

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;

/// Sphere primitive defined by center and radius.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor.
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3A, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        // Vector from ray origin to sphere center
        let oc = self.center - r.origin;

        // Quadratic coefficients with h = -b/2
        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        // A tangent ray (zero discriminant) counts as a miss
        let discriminant = h * h - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = r.at(root);
        let outward_normal = (p - self.center) / self.radius;
        Some(HitRecord::new(r, root, p, outward_normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORWARD: Interval = Interval {
        min: 0.0,
        max: f32::INFINITY,
    };

    fn scene_sphere() -> Sphere {
        Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5)
    }

    #[test]
    fn head_on_ray_hits() {
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let rec = scene_sphere().hit(&r, FORWARD).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-6);
        assert!((rec.p - Vec3A::new(0.0, 0.0, -0.5)).length() < 1e-6);
        assert!((rec.normal - Vec3A::new(0.0, 0.0, 1.0)).length() < 1e-6);
        assert!(rec.front_face);
    }

    #[test]
    fn perpendicular_ray_misses() {
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(1.0, 0.0, 0.0));
        assert!(scene_sphere().hit(&r, FORWARD).is_none());
    }

    #[test]
    fn tangent_ray_misses() {
        // Grazes the silhouette at exactly one point; every coordinate is
        // exactly representable, so the discriminant is exactly zero.
        let r = Ray::new(Vec3A::new(0.5, 0.0, 0.0), Vec3A::new(0.0, 0.0, -1.0));
        assert!(scene_sphere().hit(&r, FORWARD).is_none());
    }

    #[test]
    fn sphere_behind_origin_misses() {
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, 1.0));
        assert!(scene_sphere().hit(&r, FORWARD).is_none());
    }

    #[test]
    fn negative_radius_is_clamped() {
        let s = Sphere::new(Vec3A::ZERO, -1.0);
        assert_eq!(s.radius, 0.0);
    }
}

//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives and HitRecord for
//! intersection data. The flat-shaded renderer only asks whether a hit
//! exists, but primitives report the full record so richer shading can
//! consume it without changing the intersection contract.

use glam::Vec3A;

use crate::interval::Interval;
use crate::ray::Ray;

/// Ray-object intersection information.
///
/// Contains the intersection distance, point, and oriented surface normal.
#[derive(Debug, Clone)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Vec3A,
    /// Surface normal at the intersection point (unit vector, opposing the ray)
    pub normal: Vec3A,
    /// Distance along the ray to the intersection point
    pub t: f32,
    /// True if ray hits the front face, false if hits the back face
    pub front_face: bool,
}

impl HitRecord {
    /// Build a record from an outward surface normal.
    ///
    /// The stored normal always points against the incident ray; the
    /// front-face flag records which side was struck.
    pub fn new(r: &Ray, t: f32, p: Vec3A, outward_normal: Vec3A) -> Self {
        let front_face = r.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Self {
            p,
            normal,
            t,
            front_face,
        }
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Core abstraction for geometric primitives. Returns the intersection
/// record for the nearest hit within the parameter range, or None.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection within the given parameter range.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing. Supports polymorphic
/// objects through Box<dyn Hittable>.
pub struct HittableList {
    /// Vector of boxed hittable objects
    pub objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest_so_far = ray_t.max;
        let mut closest_hit = None;

        // Keep the nearest intersection across all objects
        for object in &self.objects {
            if let Some(rec) = object.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest_hit = Some(rec);
            }
        }

        closest_hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::Sphere;

    #[test]
    fn empty_scene_never_hits() {
        let world = HittableList::new();
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(world.hit(&r, Interval::new(0.0, f32::INFINITY)).is_none());
    }

    #[test]
    fn closest_object_wins() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Vec3A::new(0.0, 0.0, -3.0), 0.25)));
        world.add(Box::new(Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.25)));

        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let rec = world.hit(&r, Interval::new(0.0, f32::INFINITY)).unwrap();
        assert!((rec.t - 0.75).abs() < 1e-6);
    }

    #[test]
    fn back_face_hit_flips_normal() {
        // Ray starting inside the sphere strikes the back face
        let sphere = Sphere::new(Vec3A::ZERO, 1.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&r, Interval::new(0.0, f32::INFINITY)).unwrap();
        assert!(!rec.front_face);
        assert!((rec.normal - Vec3A::new(0.0, 0.0, 1.0)).length() < 1e-6);
    }
}

use std::sync::Arc;

use super::Shape;
use crate::{
    hit::Hit,
    materials::Material,
    math::{Bounds3, Point3, Ray, Vec3},
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Shapes/Spheres.html

/// A sphere object.
pub struct Sphere {
    center: Point3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Creates a new `Sphere`.
    pub fn new(center: Point3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    // Spherical surface parametrization from the outward unit normal
    fn uv(n: Vec3) -> (f32, f32) {
        let theta = (-n.y).acos();
        let phi = (-n.z).atan2(n.x) + std::f32::consts::PI;
        (
            phi / (2.0 * std::f32::consts::PI),
            theta / std::f32::consts::PI,
        )
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        let oc = ray.o - self.center;

        // Quadratic coefficients
        let a = ray.d.len_sqr();
        let b = 2.0 * oc.dot(ray.d);
        let c = oc.len_sqr() - self.radius * self.radius;

        // Solve quadratic equation for ts
        let d = b * b - 4.0 * a * c;
        if d < 0.0 {
            return None;
        }
        let rd = d.sqrt();

        let q = if b < 0.0 {
            -0.5 * (b - rd)
        } else {
            -0.5 * (b + rd)
        };

        // Find hit points, preferring the near one
        let mut t0 = q / a;
        let mut t1 = c / q;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        if t0 > t_max || t1 <= t_min {
            return None;
        }
        let mut t = t0;
        if t <= t_min {
            t = t1;
            if t > t_max {
                return None;
            }
        };

        let outward_n = (ray.point(t) - self.center) / self.radius;
        let (u, v) = Self::uv(outward_n);

        Some(Hit::new(ray, t, outward_n, u, v, self.material.clone()))
    }

    fn world_bound(&self) -> Option<Bounds3> {
        let r = Vec3::new(self.radius, self.radius, self.radius);
        Some(Bounds3::new(self.center - r, self.center + r))
    }
}

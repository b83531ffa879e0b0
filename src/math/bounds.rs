use super::{point::Point3, ray::Ray};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Bounding_Boxes.html

/// An axis-aligned bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3 {
    /// The minimum extent of the bounds.
    pub p_min: Point3,
    /// The maximum extent of the bounds.
    pub p_max: Point3,
}

impl Bounds3 {
    /// Creates a new `Bounds3` spanning the two points.
    pub fn new(p0: Point3, p1: Point3) -> Self {
        Self {
            p_min: p0.min(p1),
            p_max: p0.max(p1),
        }
    }

    /// Returns the union of this `Bounds3` and another `Bounds3`.
    ///
    /// The result contains both inputs fully.
    pub fn union_b(&self, other: Self) -> Self {
        Self {
            p_min: self.p_min.min(other.p_min),
            p_max: self.p_max.max(other.p_max),
        }
    }

    /// Returns the union of this `Bounds3` and a [Point3].
    pub fn union_p(&self, p: Point3) -> Self {
        Self {
            p_min: self.p_min.min(p),
            p_max: self.p_max.max(p),
        }
    }

    /// Checks if `ray` passes through this `Bounds3` within `(t_min, t_max)`.
    pub fn intersect(&self, ray: Ray, mut t_min: f32, mut t_max: f32) -> bool {
        // Slab test over the three axis-aligned plane pairs. A zero direction
        // component divides to signed infinities which widen or reject the
        // interval correctly for rays parallel to a slab.
        for a in 0..3 {
            let inv_d = 1.0 / ray.d[a];
            let mut t0 = (self.p_min[a] - ray.o[a]) * inv_d;
            let mut t1 = (self.p_max[a] - ray.o[a]) * inv_d;
            if inv_d < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t0.max(t_min);
            t_max = t1.min(t_max);
            if t_max <= t_min {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use rand::{distributions::Standard, Rng};
    use rand_pcg::Pcg32;

    use super::Bounds3;
    use crate::math::{point3, vec3, Point3, Ray};

    #[test]
    fn new() {
        // Corners are sorted component-wise
        let bb = Bounds3::new(point3(1.0, 0.0, 1.0), point3(0.0, 1.0, 0.0));
        assert_eq!(bb.p_min, point3(0.0, 0.0, 0.0));
        assert_eq!(bb.p_max, point3(1.0, 1.0, 1.0));
    }

    #[test]
    fn union_contains_both() {
        let mut rng = Pcg32::new(0xDEADCAFE, 0);
        let mut random_point = |scale: f32| -> Point3 {
            point3(
                (rng.sample::<f32, _>(Standard) - 0.5) * scale,
                (rng.sample::<f32, _>(Standard) - 0.5) * scale,
                (rng.sample::<f32, _>(Standard) - 0.5) * scale,
            )
        };

        for _ in 0..100 {
            let a = Bounds3::new(random_point(10.0), random_point(10.0));
            let b = Bounds3::new(random_point(100.0), random_point(100.0));
            let u = a.union_b(b);
            for bb in [a, b] {
                for i in 0..3 {
                    assert!(u.p_min[i] <= bb.p_min[i]);
                    assert!(u.p_max[i] >= bb.p_max[i]);
                }
            }
            assert_eq!(u, b.union_b(a));
        }
    }

    #[test]
    fn union_p() {
        let bb = Bounds3::new(point3(0.0, 0.0, 0.0), point3(2.0, 2.0, 2.0));
        assert_eq!(bb.union_p(point3(1.0, 1.0, 1.0)), bb);
        assert_eq!(
            bb.union_p(point3(3.0, -1.0, 1.0)),
            Bounds3::new(point3(0.0, -1.0, 0.0), point3(3.0, 2.0, 2.0))
        );
    }

    #[test]
    fn intersect() {
        let bb = Bounds3::new(point3(-1.0, -1.0, -1.0), point3(1.0, 1.0, 1.0));

        let hit = Ray::new(point3(0.0, 0.0, 5.0), vec3(0.0, 0.0, -1.0));
        assert!(bb.intersect(hit, 0.001, f32::INFINITY));

        let miss = Ray::new(point3(0.0, 5.0, 5.0), vec3(0.0, 0.0, -1.0));
        assert!(!bb.intersect(miss, 0.001, f32::INFINITY));

        // Box behind the ray
        assert!(!bb.intersect(
            Ray::new(point3(0.0, 0.0, 5.0), vec3(0.0, 0.0, 1.0)),
            0.001,
            f32::INFINITY
        ));

        // Range ends before the box
        assert!(!bb.intersect(hit, 0.001, 1.0));
    }

    #[test]
    fn intersect_axis_parallel() {
        let bb = Bounds3::new(point3(-1.0, -1.0, -1.0), point3(1.0, 1.0, 1.0));

        // Parallel to two slabs, passing inside
        let inside = Ray::new(point3(0.5, 0.5, 5.0), vec3(0.0, 0.0, -1.0));
        assert!(bb.intersect(inside, 0.001, f32::INFINITY));

        // Parallel to two slabs, passing outside
        let outside = Ray::new(point3(0.5, 1.5, 5.0), vec3(0.0, 0.0, -1.0));
        assert!(!bb.intersect(outside, 0.001, f32::INFINITY));
    }
}

use std::sync::Arc;

use crate::{
    materials::Material,
    math::{Point3, Ray, Vec3},
};

/// Info of a surface hit.
pub struct Hit {
    /// Hit distance along the ray
    pub t: f32,
    /// World position
    pub p: Point3,
    /// Surface normal, always oriented against the incoming ray
    pub n: Vec3,
    /// `true` if the ray arrived from outside the surface
    pub front_face: bool,
    /// Surface parametrization
    pub u: f32,
    /// Surface parametrization
    pub v: f32,
    /// Material at the hit point
    pub material: Arc<dyn Material>,
}

impl Hit {
    /// Creates a new `Hit` at distance `t` along `ray`, flipping the outward
    /// normal against the ray direction.
    pub fn new(
        ray: Ray,
        t: f32,
        outward_n: Vec3,
        u: f32,
        v: f32,
        material: Arc<dyn Material>,
    ) -> Self {
        let front_face = ray.d.dot(outward_n) < 0.0;
        let n = if front_face { outward_n } else { -outward_n };
        Self {
            t,
            p: ray.point(t),
            n,
            front_face,
            u,
            v,
            material,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::Hit;
    use crate::{
        materials::{Material, Matte},
        math::{point3, vec3, Ray, Spectrum},
        textures::ConstantTexture,
    };

    fn test_material() -> Arc<dyn Material> {
        Arc::new(Matte::new(Arc::new(ConstantTexture::new(Spectrum::ones()))))
    }

    #[test]
    fn front_face() {
        let outward_n = vec3(0.0, 0.0, 1.0);

        let from_outside = Ray::new(point3(0.0, 0.0, 1.0), vec3(0.0, 0.0, -1.0));
        let hit = Hit::new(from_outside, 0.5, outward_n, 0.0, 0.0, test_material());
        assert!(hit.front_face);
        assert_eq!(hit.n, outward_n);
        assert_eq!(hit.p, point3(0.0, 0.0, 0.5));

        let from_inside = Ray::new(point3(0.0, 0.0, -1.0), vec3(0.0, 0.0, 1.0));
        let hit = Hit::new(from_inside, 0.5, outward_n, 0.0, 0.0, test_material());
        assert!(!hit.front_face);
        assert_eq!(hit.n, -outward_n);
    }
}

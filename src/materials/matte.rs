use std::sync::Arc;

use super::{Material, ScatterRecord};
use crate::{
    hit::Hit,
    math::Ray,
    sampling::{uniform_sample_sphere, Sampler},
    textures::Texture,
};

// Based on Ray Tracing in One Weekend
// https://raytracing.github.io/books/RayTracingInOneWeekend.html#diffusematerials

/// A diffuse material.
pub struct Matte {
    albedo: Arc<dyn Texture>,
}

impl Matte {
    /// Creates a new `Matte`.
    pub fn new(albedo: Arc<dyn Texture>) -> Self {
        Self { albedo }
    }
}

impl Material for Matte {
    fn scatter(&self, _ray: Ray, hit: &Hit, sampler: &mut dyn Sampler) -> Option<ScatterRecord> {
        let mut direction = hit.n + uniform_sample_sphere(sampler.get_2d());

        // Catch degenerate scatter direction
        if direction.near_zero() {
            direction = hit.n;
        }

        Some(ScatterRecord {
            attenuation: self.albedo.evaluate(hit.u, hit.v, hit.p),
            ray: Ray::new(hit.p, direction),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::Matte;
    use crate::{
        hit::Hit,
        materials::Material,
        math::{point3, vec3, Ray, Spectrum},
        sampling::test_utils::FixedSampler,
        textures::ConstantTexture,
    };

    fn test_hit(material: Arc<dyn Material>) -> (Ray, Hit) {
        let ray = Ray::new(point3(0.0, 1.0, 0.0), vec3(0.0, -1.0, 0.0));
        let hit = Hit::new(ray, 1.0, vec3(0.0, 1.0, 0.0), 0.0, 0.0, material);
        (ray, hit)
    }

    #[test]
    fn always_scatters() {
        let albedo = Spectrum::new(0.5, 0.4, 0.3);
        let material = Arc::new(Matte::new(Arc::new(ConstantTexture::new(albedo))));
        let (ray, hit) = test_hit(material.clone());

        let mut sampler = FixedSampler::new(vec![0.3, 0.7]);
        let scatter = material.scatter(ray, &hit, &mut sampler).unwrap();
        assert_eq!(scatter.attenuation, albedo);
        assert_eq!(scatter.ray.o, hit.p);
        // Unit sphere offset from the normal keeps the ray in the hemisphere
        assert!(scatter.ray.d.dot(hit.n) > 0.0);
    }

    #[test]
    fn degenerate_direction_falls_back_to_normal() {
        let material = Arc::new(Matte::new(Arc::new(ConstantTexture::new(
            Spectrum::ones(),
        ))));
        // Normal along +z so the u = (1, 0) sphere sample warps exactly to -z
        // and cancels it
        let ray = Ray::new(point3(0.0, 0.0, 1.0), vec3(0.0, 0.0, -1.0));
        let hit = Hit::new(ray, 1.0, vec3(0.0, 0.0, 1.0), 0.0, 0.0, material.clone());

        let mut sampler = FixedSampler::new(vec![1.0, 0.0]);
        let scatter = material.scatter(ray, &hit, &mut sampler).unwrap();
        assert_eq!(scatter.ray.d, hit.n);
    }

    #[test]
    fn attenuation_in_range() {
        let albedo = Spectrum::new(0.9, 0.1, 0.5);
        let material = Arc::new(Matte::new(Arc::new(ConstantTexture::new(albedo))));
        let (ray, hit) = test_hit(material.clone());

        let mut sampler = FixedSampler::new(vec![0.1, 0.9, 0.4, 0.6]);
        for _ in 0..10 {
            let scatter = material.scatter(ray, &hit, &mut sampler).unwrap();
            for c in [
                scatter.attenuation.r,
                scatter.attenuation.g,
                scatter.attenuation.b,
            ] {
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }
}

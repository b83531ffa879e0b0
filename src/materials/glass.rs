use super::{Material, ScatterRecord};
use crate::{
    hit::Hit,
    math::{reflect, refract, Ray, Spectrum},
    sampling::Sampler,
};

// Based on Ray Tracing in One Weekend
// https://raytracing.github.io/books/RayTracingInOneWeekend.html#dielectrics

/// A clear refractive material.
pub struct Glass {
    refraction_index: f32,
}

impl Glass {
    /// Creates a new `Glass` with the given index of refraction.
    pub fn new(refraction_index: f32) -> Self {
        Self { refraction_index }
    }

    // Approximates the Fresnel reflectance using a method by Christophe Schlick
    fn reflectance(cosine: f32, ref_index: f32) -> f32 {
        let r0 = (1.0 - ref_index) / (1.0 + ref_index);
        let r0 = r0 * r0;
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Glass {
    fn scatter(&self, ray: Ray, hit: &Hit, sampler: &mut dyn Sampler) -> Option<ScatterRecord> {
        let refraction_ratio = if hit.front_face {
            1.0 / self.refraction_index
        } else {
            self.refraction_index
        };

        let unit_d = ray.d.normalized();
        let cos_theta = (-unit_d).dot(hit.n).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = refraction_ratio * sin_theta > 1.0;
        let direction =
            if cannot_refract || Self::reflectance(cos_theta, refraction_ratio) > sampler.get_1d() {
                reflect(unit_d, hit.n)
            } else {
                refract(unit_d, hit.n, refraction_ratio)
            };

        // The medium absorbs nothing
        Some(ScatterRecord {
            attenuation: Spectrum::ones(),
            ray: Ray::new(hit.p, direction),
        })
    }
}

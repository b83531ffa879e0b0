use super::{Material, ScatterRecord};
use crate::{
    hit::Hit,
    math::{reflect, Ray, Spectrum},
    sampling::{uniform_sample_ball, Sampler},
};

// Based on Ray Tracing in One Weekend
// https://raytracing.github.io/books/RayTracingInOneWeekend.html#metal

/// A specular material with an optional fuzzed reflection.
pub struct Metal {
    albedo: Spectrum,
    fuzz: f32,
}

impl Metal {
    /// Creates a new `Metal`. `fuzz` is clamped to `[0, 1]`.
    pub fn new(albedo: Spectrum, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(&self, ray: Ray, hit: &Hit, sampler: &mut dyn Sampler) -> Option<ScatterRecord> {
        let reflected = reflect(ray.d.normalized(), hit.n);
        let direction =
            reflected + uniform_sample_ball(sampler.get_2d(), sampler.get_1d()) * self.fuzz;

        if direction.dot(hit.n) > 0.0 {
            Some(ScatterRecord {
                attenuation: self.albedo,
                ray: Ray::new(hit.p, direction),
            })
        } else {
            // The fuzzed direction points into the surface, treat the ray as
            // absorbed
            None
        }
    }
}

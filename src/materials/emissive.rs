use super::{Material, ScatterRecord};
use crate::{
    hit::Hit,
    math::{Point3, Ray, Spectrum},
    sampling::Sampler,
};

// Based on Ray Tracing: The Next Week
// https://raytracing.github.io/books/RayTracingTheNextWeek.html#rectanglesandlights

/// A light emitting material. Never scatters.
pub struct Emissive {
    emit: Spectrum,
}

impl Emissive {
    /// Creates a new `Emissive` with the given radiance.
    pub fn new(emit: Spectrum) -> Self {
        Self { emit }
    }
}

impl Material for Emissive {
    fn scatter(&self, _ray: Ray, _hit: &Hit, _sampler: &mut dyn Sampler) -> Option<ScatterRecord> {
        None
    }

    fn emitted(&self, _u: f32, _v: f32, _p: Point3) -> Spectrum {
        self.emit
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::Emissive;
    use crate::{
        hit::Hit,
        materials::Material,
        math::{point3, vec3, Point3, Ray, Spectrum},
        sampling::test_utils::FixedSampler,
    };

    #[test]
    fn emits_and_never_scatters() {
        let emit = Spectrum::new(10.0, 9.0, 8.0);
        let material = Arc::new(Emissive::new(emit));

        assert_eq!(material.emitted(0.3, 0.6, point3(1.0, 2.0, 3.0)), emit);
        assert_eq!(material.emitted(0.0, 0.0, Point3::zeros()), emit);

        let ray = Ray::new(point3(0.0, 1.0, 0.0), vec3(0.0, -1.0, 0.0));
        let hit = Hit::new(ray, 1.0, vec3(0.0, 1.0, 0.0), 0.0, 0.0, material.clone());
        let mut sampler = FixedSampler::new(vec![0.5]);
        assert!(material.scatter(ray, &hit, &mut sampler).is_none());
    }
}

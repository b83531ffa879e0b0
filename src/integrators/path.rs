use serde::{Deserialize, Serialize};

use super::{Integrator, RadianceResult};
use crate::{
    materials::ScatterRecord,
    math::{Ray, Spectrum},
    sampling::Sampler,
    scene::Scene,
};

// Based on Ray Tracing: The Next Week
// https://raytracing.github.io/books/RayTracingTheNextWeek.html#lights

// Scattered rays start a nudge out to dodge self-intersection with the
// surface they left
const T_MIN: f32 = 0.001;

#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub struct Params {
    /// Maximum number of scattering events along one path
    pub max_depth: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self { max_depth: 50 }
    }
}

/// A Monte Carlo estimator that walks scattered rays through the scene,
/// summing emitted light attenuated by the surfaces passed on the way.
pub struct Path {
    max_depth: u32,
}

impl Path {
    pub fn new(params: Params) -> Self {
        Self {
            max_depth: params.max_depth,
        }
    }
}

impl Integrator for Path {
    fn li(&self, mut ray: Ray, scene: &Scene, sampler: &mut dyn Sampler) -> RadianceResult {
        let mut radiance = Spectrum::zeros();
        // Path throughput, the product of attenuations so far
        let mut beta = Spectrum::ones();
        let mut ray_count = 0;

        let mut bounces = 0;
        while bounces < self.max_depth {
            ray_count += 1;
            match scene.root.intersect(ray, T_MIN, f32::INFINITY) {
                Some(hit) => {
                    radiance += beta * hit.material.emitted(hit.u, hit.v, hit.p);

                    match hit.material.scatter(ray, &hit, sampler) {
                        Some(ScatterRecord { attenuation, ray: scattered }) => {
                            beta *= attenuation;
                            ray = scattered;
                        }
                        // Absorbed, the path ends with the emitted light
                        None => break,
                    }
                }
                None => {
                    radiance += beta * scene.background.sample(ray);
                    break;
                }
            }
            bounces += 1;
        }

        RadianceResult {
            li: radiance,
            ray_scene_intersections: ray_count,
        }
    }
}

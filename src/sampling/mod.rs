mod uniform;

pub use uniform::UniformSampler;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::math::{Point2, Vec3};

#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub enum SamplerSettings {
    Uniform { pixel_samples: u32, seed: u64 },
}

impl Default for SamplerSettings {
    fn default() -> Self {
        SamplerSettings::Uniform {
            pixel_samples: 100,
            seed: 0x5EED5EED,
        }
    }
}

pub fn create_sampler(settings: SamplerSettings) -> Arc<dyn Sampler> {
    Arc::new(match settings {
        SamplerSettings::Uniform {
            pixel_samples,
            seed,
        } => UniformSampler::new(pixel_samples, seed),
    })
}

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Sampling_and_Reconstruction/Sampling_Interface.html

pub trait Sampler: Send + Sync {
    /// Clones a `Sampler` with its prng moved onto the uncorrelated `stream`.
    fn clone(&self, stream: u64) -> Box<dyn Sampler>;
    /// Returns the number of samples per pixel this `Sampler` generates.
    fn samples_per_pixel(&self) -> u32;
    /// Returns the next sample dimension in `[0, 1)`.
    fn get_1d(&mut self) -> f32;
    /// Returns the next two sample dimensions in `[0, 1)²`.
    fn get_2d(&mut self) -> Point2;
}

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Monte_Carlo_Integration/2D_Sampling_with_Multidimensional_Transformations

/// Warps a unit square sample onto the unit sphere surface.
pub fn uniform_sample_sphere(u: Point2) -> Vec3 {
    let z = 1.0 - 2.0 * u.x;
    let r = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * std::f32::consts::PI * u.y;
    Vec3::new(r * phi.cos(), r * phi.sin(), z)
}

/// Warps a unit square sample and a radius sample into the unit ball.
pub fn uniform_sample_ball(u: Point2, u_radius: f32) -> Vec3 {
    uniform_sample_sphere(u) * u_radius.cbrt()
}

/// Warps a unit square sample onto the unit disk, preserving stratification
/// better than a polar mapping.
pub fn concentric_sample_disk(u: Point2) -> Point2 {
    let offset = Point2::new(2.0 * u.x - 1.0, 2.0 * u.y - 1.0);
    if offset.x == 0.0 && offset.y == 0.0 {
        return offset;
    }

    let (theta, r) = if offset.x.abs() > offset.y.abs() {
        (
            std::f32::consts::FRAC_PI_4 * (offset.y / offset.x),
            offset.x,
        )
    } else {
        (
            std::f32::consts::FRAC_PI_2 - std::f32::consts::FRAC_PI_4 * (offset.x / offset.y),
            offset.y,
        )
    };

    Point2::new(r * theta.cos(), r * theta.sin())
}


#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{concentric_sample_disk, uniform_sample_ball, uniform_sample_sphere};
    use crate::math::Point2;

    #[test]
    fn sphere_samples_are_unit() {
        for i in 0..10 {
            for j in 0..10 {
                let u = Point2::new((i as f32 + 0.5) / 10.0, (j as f32 + 0.5) / 10.0);
                assert_abs_diff_eq!(uniform_sample_sphere(u).len(), 1.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn ball_samples_are_inside() {
        for i in 0..10 {
            for j in 0..10 {
                let u = Point2::new((i as f32 + 0.5) / 10.0, (j as f32 + 0.5) / 10.0);
                let radius = (i as f32) / 10.0;
                assert!(uniform_sample_ball(u, radius).len() <= 1.0 + 1e-5);
            }
        }
    }

    #[test]
    fn disk_samples_are_inside() {
        for i in 0..10 {
            for j in 0..10 {
                let u = Point2::new(i as f32 / 9.0, j as f32 / 9.0);
                let d = concentric_sample_disk(u);
                assert!((d.x * d.x + d.y * d.y).sqrt() <= 1.0 + 1e-5);
            }
        }
    }

    #[test]
    fn disk_center_maps_to_center() {
        let d = concentric_sample_disk(Point2::new(0.5, 0.5));
        assert_abs_diff_eq!(d.x, 0.0);
        assert_abs_diff_eq!(d.y, 0.0);
    }
}

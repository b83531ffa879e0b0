use rand::{distributions::Standard, Rng};
use rand_pcg::Pcg32;

use super::Sampler;
use crate::math::Point2;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Sampling_and_Reconstruction/Stratified_Sampling.html

/// An independent uniform sampler over one PCG-32 stream.
pub struct UniformSampler {
    pixel_samples: u32,
    rng: Pcg32,
    // Stored to clone the sampler with a different stream
    rng_seed: u64,
}

impl UniformSampler {
    /// Creates a new `UniformSampler` on stream 0 of `seed`.
    pub fn new(pixel_samples: u32, seed: u64) -> Self {
        Self {
            pixel_samples,
            rng: Pcg32::new(seed, 0),
            rng_seed: seed,
        }
    }
}

impl Sampler for UniformSampler {
    fn clone(&self, stream: u64) -> Box<dyn Sampler> {
        // Pcg has uncorrelated streams so let's leverage that
        Box::new(Self {
            pixel_samples: self.pixel_samples,
            rng: Pcg32::new(self.rng_seed, stream),
            rng_seed: self.rng_seed,
        })
    }

    fn samples_per_pixel(&self) -> u32 {
        self.pixel_samples
    }

    fn get_1d(&mut self) -> f32 {
        self.rng.sample(Standard)
    }

    fn get_2d(&mut self) -> Point2 {
        Point2::new(self.rng.sample(Standard), self.rng.sample(Standard))
    }
}

#[cfg(test)]
mod tests {
    use super::UniformSampler;
    use crate::sampling::Sampler;

    #[test]
    fn values_in_range() {
        let mut sampler = UniformSampler::new(4, 0x1234);
        for _ in 0..1000 {
            let v = sampler.get_1d();
            assert!((0.0..1.0).contains(&v));
            let p = sampler.get_2d();
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.y));
        }
    }

    #[test]
    fn clones_are_deterministic() {
        let sampler = UniformSampler::new(4, 0x1234);
        let mut a = sampler.clone(7);
        let mut b = sampler.clone(7);
        for _ in 0..100 {
            assert_eq!(a.get_1d(), b.get_1d());
        }
    }

    #[test]
    fn streams_are_uncorrelated() {
        let sampler = UniformSampler::new(4, 0x1234);
        let mut a = sampler.clone(0);
        let mut b = sampler.clone(1);
        let matches = (0..100).filter(|_| a.get_1d() == b.get_1d()).count();
        assert!(matches < 100);
    }
}

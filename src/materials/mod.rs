mod emissive;
mod glass;
mod matte;
mod metal;

pub use emissive::Emissive;
pub use glass::Glass;
pub use matte::Matte;
pub use metal::Metal;

use crate::{
    hit::Hit,
    math::{Point3, Ray, Spectrum},
    sampling::Sampler,
};

/// The outcome of a successful scattering event.
pub struct ScatterRecord {
    /// Fraction of carried light that survives, per channel
    pub attenuation: Spectrum,
    /// The ray to continue the path along
    pub ray: Ray,
}

pub trait Material: Send + Sync {
    /// Scatters `ray` at `hit`. Returns `None` when the ray is absorbed.
    fn scatter(&self, ray: Ray, hit: &Hit, sampler: &mut dyn Sampler) -> Option<ScatterRecord>;

    /// Light emitted at the hit point. Non-emissive materials emit black.
    fn emitted(&self, _u: f32, _v: f32, _p: Point3) -> Spectrum {
        Spectrum::zeros()
    }
}

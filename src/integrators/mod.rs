mod normals;
mod path;

pub use normals::Normals;
pub use path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, EnumVariantNames};

use crate::{
    camera::{Camera, CameraSample},
    math::{Point2, Ray, Spectrum},
    sampling::Sampler,
    scene::Scene,
};

pub type PathParams = path::Params;

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Display, EnumString, EnumVariantNames)]
pub enum IntegratorType {
    Path(path::Params),
    Normals,
}

impl IntegratorType {
    pub fn instantiate(self) -> Box<dyn Integrator> {
        match self {
            IntegratorType::Path(params) => Box::new(Path::new(params)),
            IntegratorType::Normals => Box::new(Normals {}),
        }
    }
}

impl Default for IntegratorType {
    fn default() -> Self {
        IntegratorType::Path(path::Params::default())
    }
}

pub struct RadianceResult {
    pub li: Spectrum,
    pub ray_scene_intersections: usize,
}

// Public interface for scene integrators.
pub trait Integrator {
    /// Evaluates the incoming radiance along `ray`. Also returns the number of
    /// rays cast into `scene`.
    fn li(&self, ray: Ray, scene: &Scene, sampler: &mut dyn Sampler) -> RadianceResult;

    /// Renders film row `y`, storing the averaged pixels into `row_pixels`.
    /// `on_pixel_done` is called after each finished pixel. Returns the number
    /// of rays cast into `scene`.
    #[allow(clippy::too_many_arguments)]
    fn render_row(
        &self,
        scene: &Scene,
        camera: &Camera,
        sampler: &mut dyn Sampler,
        y: u32,
        width: u32,
        height: u32,
        row_pixels: &mut [Spectrum],
        on_pixel_done: &mut dyn FnMut(),
    ) -> usize {
        assert!(row_pixels.len() >= width as usize);

        let mut ray_count = 0;
        for x in 0..width {
            let mut color = Spectrum::zeros();
            let sample_count = sampler.samples_per_pixel();
            for _ in 0..sample_count {
                let jitter = sampler.get_2d();
                // Normalized image plane coordinates, with the film row 0 at
                // the top of the image
                let s = (x as f32 + jitter.x) / (width - 1) as f32;
                let t = 1.0 - (y as f32 + jitter.y) / (height - 1) as f32;

                let ray = camera.ray(&CameraSample {
                    p_film: Point2::new(s, t),
                    p_lens: sampler.get_2d(),
                });

                let result = self.li(ray, scene, sampler);
                color += result.li;
                ray_count += result.ray_scene_intersections;
            }
            row_pixels[x as usize] = color / sample_count as f32;
            on_pixel_done();
        }
        ray_count
    }
}

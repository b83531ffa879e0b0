use std::sync::Arc;

use super::{ConstantTexture, Texture};
use crate::math::{Point3, Spectrum};

/// A procedural 3D checkerboard over two sub-textures.
///
/// The pattern lives in world space and ignores the surface parametrization.
pub struct CheckerTexture {
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
}

impl CheckerTexture {
    pub fn new(even: Arc<dyn Texture>, odd: Arc<dyn Texture>) -> Self {
        Self { even, odd }
    }

    /// Creates a new `CheckerTexture` over two solid colors.
    pub fn with_colors(even: Spectrum, odd: Spectrum) -> Self {
        Self {
            even: Arc::new(ConstantTexture::new(even)),
            odd: Arc::new(ConstantTexture::new(odd)),
        }
    }
}

impl Texture for CheckerTexture {
    fn evaluate(&self, u: f32, v: f32, p: Point3) -> Spectrum {
        let sines = (10.0 * p.x).sin() * (10.0 * p.y).sin() * (10.0 * p.z).sin();
        if sines < 0.0 {
            self.odd.evaluate(u, v, p)
        } else {
            self.even.evaluate(u, v, p)
        }
    }
}

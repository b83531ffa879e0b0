use super::Texture;
use crate::math::{Point3, Spectrum};

/// A texture with the same value everywhere.
pub struct ConstantTexture {
    value: Spectrum,
}

impl ConstantTexture {
    pub fn new(value: Spectrum) -> Self {
        Self { value }
    }
}

impl Texture for ConstantTexture {
    fn evaluate(&self, _u: f32, _v: f32, _p: Point3) -> Spectrum {
        self.value
    }
}

use super::{point::Point3, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Rays.html

/// A ray with an origin and a direction. The direction is not required to be
/// unit length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub o: Point3,
    pub d: Vec3,
}

impl Ray {
    /// Creates a new `Ray`.
    pub fn new(o: Point3, d: Vec3) -> Self {
        let ret = Self { o, d };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Checks if any of the members in this `Ray` contain NaNs.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans()
    }

    /// Finds the [Point3] on this `Ray` at distance `t`.
    pub fn point(&self, t: f32) -> Point3 {
        self.o + self.d * t
    }
}

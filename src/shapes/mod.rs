mod list;
mod sphere;

pub use list::ShapeList;
pub use sphere::Sphere;

use crate::{
    hit::Hit,
    math::{Bounds3, Ray},
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Shapes/Basic_Shape_Interface.html#Shape

pub trait Shape: Send + Sync {
    /// Intersects [Ray] with this object, returning the nearest hit with
    /// distance in `(t_min, t_max]`.
    fn intersect(&self, ray: Ray, t_min: f32, t_max: f32) -> Option<Hit>;

    /// Returns the world space AABB of the `Shape`, or `None` if it is
    /// unbounded.
    fn world_bound(&self) -> Option<Bounds3>;
}

mod bounds;
mod point;
mod ray;
mod spectrum;
mod vector;

pub use bounds::Bounds3;
pub use point::{point2, point3, Point2, Point3};
pub use ray::Ray;
pub use spectrum::Spectrum;
pub use vector::{reflect, refract, vec2, vec3, Vec2, Vec3};

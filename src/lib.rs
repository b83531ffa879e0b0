pub mod bvh;
pub mod camera;
pub mod film;
pub mod hit;
pub mod integrators;
pub mod macros;
pub mod materials;
pub mod math;
pub mod renderer;
pub mod sampling;
pub mod scene;
pub mod shapes;
pub mod textures;

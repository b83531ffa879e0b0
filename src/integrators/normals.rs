use super::{Integrator, RadianceResult};
use crate::{
    math::{Ray, Spectrum},
    sampling::Sampler,
    scene::Scene,
};

/// Debug integrator that shades surfaces with their world space normal.
pub struct Normals {}

impl Integrator for Normals {
    fn li(&self, ray: Ray, scene: &Scene, _sampler: &mut dyn Sampler) -> RadianceResult {
        let color = match scene.root.intersect(ray, 0.001, f32::INFINITY) {
            Some(hit) => Spectrum::new(hit.n.x + 1.0, hit.n.y + 1.0, hit.n.z + 1.0) / 2.0,
            None => Spectrum::zeros(),
        };

        RadianceResult {
            li: color,
            ray_scene_intersections: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use approx::assert_abs_diff_eq;

    use super::Normals;
    use crate::{
        integrators::Integrator,
        materials::Matte,
        math::{point3, vec3, Point3, Ray, Spectrum},
        sampling::test_utils::FixedSampler,
        scene::{Background, Scene},
        shapes::{ShapeList, Sphere},
        textures::ConstantTexture,
    };

    #[test]
    fn shades_normals() {
        let mut list = ShapeList::new();
        list.add(Arc::new(Sphere::new(
            point3(0.0, 0.0, -2.0),
            0.5,
            Arc::new(Matte::new(Arc::new(ConstantTexture::new(
                Spectrum::ones(),
            )))),
        )));
        let scene = Scene {
            name: "normals".into(),
            root: Arc::new(list),
            background: Background::Solid(Spectrum::ones()),
        };

        let integrator = Normals {};
        let mut sampler = FixedSampler::new(vec![0.5]);

        // Facing +z at the front of the sphere
        let hit = integrator.li(
            Ray::new(Point3::zeros(), vec3(0.0, 0.0, -1.0)),
            &scene,
            &mut sampler,
        );
        assert_abs_diff_eq!(hit.li, Spectrum::new(0.5, 0.5, 1.0));

        // Background is black regardless of the scene background
        let miss = integrator.li(
            Ray::new(Point3::zeros(), vec3(0.0, 1.0, 0.0)),
            &scene,
            &mut sampler,
        );
        assert!(miss.li.is_black());
    }
}

use std::{sync::Arc, time::Instant};

use rand::{distributions::Standard, Rng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, EnumVariantNames};

use crate::{
    bvh::BvhNode,
    camera::CameraParameters,
    lumi_info,
    materials::{Emissive, Glass, Material, Matte, Metal},
    math::{Point3, Ray, Spectrum, Vec3},
    shapes::{Shape, Sphere},
    textures::{CheckerTexture, ConstantTexture},
};

pub type Result<T> = std::result::Result<T, String>;

// Fixed seed so a scene builds the same layout on every run
const SCENE_SEED: u64 = 0x1AC3_59F2_84B0_6EDD;

/// How rays that escape the scene are shaded.
#[derive(Copy, Clone, Debug)]
pub enum Background {
    /// Constant ambient color
    Solid(Spectrum),
    /// Vertical white to blue gradient
    SkyGradient,
}

impl Background {
    /// Evaluates the background for an escaped `ray`.
    pub fn sample(&self, ray: Ray) -> Spectrum {
        match *self {
            Background::Solid(color) => color,
            Background::SkyGradient => {
                let unit_d = ray.d.normalized();
                let t = 0.5 * (unit_d.y + 1.0);
                Spectrum::ones() * (1.0 - t) + Spectrum::new(0.5, 0.7, 1.0) * t
            }
        }
    }
}

/// The built-in scenes.
#[derive(Copy, Clone, Debug, Deserialize, Serialize, Display, EnumString, EnumVariantNames)]
pub enum SceneType {
    RandomSpheres,
    SolarSystem,
    ThreeSpheres,
}

impl Default for SceneType {
    fn default() -> Self {
        SceneType::RandomSpheres
    }
}

pub struct Scene {
    pub name: String,
    pub root: Arc<dyn Shape>,
    pub background: Background,
}

impl Scene {
    /// Constructs the built-in scene for `scene_type`.
    ///
    /// Also returns the [CameraParameters] the scene was laid out for.
    pub fn load(scene_type: SceneType) -> Result<(Scene, CameraParameters)> {
        let load_start = Instant::now();

        let ret = match scene_type {
            SceneType::RandomSpheres => Self::random_spheres(),
            SceneType::SolarSystem => Self::solar_system(),
            SceneType::ThreeSpheres => Self::three_spheres(),
        }?;

        lumi_info!(
            "{}: Construction took {:.2}s in total",
            scene_type,
            load_start.elapsed().as_secs_f32()
        );

        Ok(ret)
    }

    /// A ground plane sphere with a checker texture, a grid of small randomized
    /// spheres, three large feature spheres and a sun light.
    pub fn random_spheres() -> Result<(Scene, CameraParameters)> {
        let mut rng = Pcg32::new(SCENE_SEED, 0);
        let mut shapes: Vec<Arc<dyn Shape>> = Vec::new();

        let checker = CheckerTexture::with_colors(
            Spectrum::new(0.2, 0.3, 0.1),
            Spectrum::new(0.9, 0.9, 0.9),
        );
        let ground = Arc::new(Matte::new(Arc::new(checker)));
        shapes.push(Arc::new(Sphere::new(
            Point3::new(0.0, -1000.0, 0.0),
            1000.0,
            ground,
        )));

        for a in -11..11 {
            for b in -11..11 {
                let choose_material: f32 = rng.sample(Standard);
                let center = Point3::new(
                    a as f32 + 0.9 * rng.sample::<f32, _>(Standard),
                    0.2,
                    b as f32 + 0.9 * rng.sample::<f32, _>(Standard),
                );

                // Keep clear of the large glass sphere
                if (center - Point3::new(4.0, 0.2, 0.0)).len() <= 0.9 {
                    continue;
                }

                let material: Arc<dyn Material> = if choose_material < 0.8 {
                    // Diffuse
                    let albedo = random_spectrum(&mut rng, 0.0, 1.0)
                        * random_spectrum(&mut rng, 0.0, 1.0);
                    Arc::new(Matte::new(Arc::new(ConstantTexture::new(albedo))))
                } else if choose_material < 0.95 {
                    // Metal
                    let albedo = random_spectrum(&mut rng, 0.5, 1.0);
                    let fuzz = rng.gen_range(0.0..0.5);
                    Arc::new(Metal::new(albedo, fuzz))
                } else if choose_material < 0.98 {
                    // Light
                    Arc::new(Emissive::new(random_spectrum(&mut rng, 0.0, 1.0)))
                } else {
                    // Glass
                    Arc::new(Glass::new(1.5))
                };
                shapes.push(Arc::new(Sphere::new(center, 0.2, material)));
            }
        }

        let glass = Arc::new(Glass::new(1.5));
        shapes.push(Arc::new(Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0, glass)));

        let matte = Arc::new(Matte::new(Arc::new(ConstantTexture::new(Spectrum::new(
            0.4, 0.2, 0.1,
        )))));
        shapes.push(Arc::new(Sphere::new(
            Point3::new(-4.0, 1.0, 0.0),
            1.0,
            matte,
        )));

        let metal = Arc::new(Metal::new(Spectrum::new(0.7, 0.6, 0.5), 0.0));
        shapes.push(Arc::new(Sphere::new(Point3::new(4.0, 1.0, 0.0), 1.0, metal)));

        let sunlight = Arc::new(Emissive::new(Spectrum::new(10.0, 9.0, 8.0)));
        shapes.push(Arc::new(Sphere::new(
            Point3::new(80.0, 300.0, 300.0),
            100.0,
            sunlight,
        )));

        lumi_info!("random_spheres: {} shapes", shapes.len());
        let root = Arc::new(BvhNode::new(shapes, &mut rng)?);

        let position = Point3::new(13.0, 2.0, 3.0);
        let target = Point3::new(0.0, 0.0, 0.0);
        Ok((
            Scene {
                name: "random_spheres".into(),
                root,
                background: Background::Solid(Spectrum::zeros()),
            },
            CameraParameters {
                position,
                target,
                up: Vec3::new(0.0, 1.0, 0.0),
                fov_y: 40.0,
                aperture: 0.1,
                focus_distance: (position - target).len(),
            },
        ))
    }

    /// The sun and the eight planets along +x, radii and distances in
    /// multiples of a thousand kilometers.
    pub fn solar_system() -> Result<(Scene, CameraParameters)> {
        let mut rng = Pcg32::new(SCENE_SEED, 1);
        let mut shapes: Vec<Arc<dyn Shape>> = Vec::new();

        let sun = Arc::new(Emissive::new(Spectrum::new(5.0, 1.0, 1.0)));
        shapes.push(Arc::new(Sphere::new(Point3::zeros(), 432.690, sun)));

        let planets: [(f32, f32, Spectrum); 8] = [
            (40_194.0, 1.516, Spectrum::new(0.47, 0.99, 0.04)),
            (67_077.0, 3.7604, Spectrum::new(0.90, 0.99, 0.04)),
            (92_960.0, 3.9588, Spectrum::new(0.004, 0.004, 0.99)),
            (155_780.0, 2.1061, Spectrum::new(0.99, 0.004, 0.004)),
            (460_640.0, 43.441, Spectrum::new(0.04, 0.99, 0.04)),
            (909_600.0, 36.184, Spectrum::new(0.04, 0.99, 0.04)),
            (1_825_700.0, 15.759, Spectrum::new(0.04, 0.99, 0.04)),
            (2_779_500.0, 15.299, Spectrum::new(0.04, 0.99, 0.04)),
        ];
        for (distance, radius, albedo) in planets {
            let material = Arc::new(Matte::new(Arc::new(ConstantTexture::new(albedo))));
            shapes.push(Arc::new(Sphere::new(
                Point3::new(distance, 0.0, 0.0),
                radius,
                material,
            )));
        }

        lumi_info!("solar_system: {} shapes", shapes.len());
        let root = Arc::new(BvhNode::new(shapes, &mut rng)?);

        let position = Point3::new(93_964.0, 0.0, 8.0);
        let target = Point3::new(0.0, 0.0, -500.0);
        Ok((
            Scene {
                name: "solar_system".into(),
                root,
                background: Background::Solid(Spectrum::zeros()),
            },
            CameraParameters {
                position,
                target,
                up: Vec3::new(0.0, 1.0, 0.0),
                fov_y: 40.0,
                aperture: 0.1,
                focus_distance: (position - target).len(),
            },
        ))
    }

    /// The classic matte, glass and metal trio under a sky gradient.
    pub fn three_spheres() -> Result<(Scene, CameraParameters)> {
        let mut rng = Pcg32::new(SCENE_SEED, 2);
        let mut shapes: Vec<Arc<dyn Shape>> = Vec::new();

        let ground = Arc::new(Matte::new(Arc::new(ConstantTexture::new(Spectrum::new(
            0.8, 0.8, 0.0,
        )))));
        shapes.push(Arc::new(Sphere::new(
            Point3::new(0.0, -100.5, -1.0),
            100.0,
            ground,
        )));

        let center = Arc::new(Matte::new(Arc::new(ConstantTexture::new(Spectrum::new(
            0.1, 0.2, 0.5,
        )))));
        shapes.push(Arc::new(Sphere::new(
            Point3::new(0.0, 0.0, -1.0),
            0.5,
            center,
        )));

        let left = Arc::new(Glass::new(1.5));
        shapes.push(Arc::new(Sphere::new(
            Point3::new(-1.0, 0.0, -1.0),
            0.5,
            left,
        )));

        let right = Arc::new(Metal::new(Spectrum::new(0.8, 0.6, 0.2), 0.0));
        shapes.push(Arc::new(Sphere::new(
            Point3::new(1.0, 0.0, -1.0),
            0.5,
            right,
        )));

        lumi_info!("three_spheres: {} shapes", shapes.len());
        let root = Arc::new(BvhNode::new(shapes, &mut rng)?);

        let position = Point3::new(3.0, 3.0, 2.0);
        let target = Point3::new(0.0, 0.0, -1.0);
        Ok((
            Scene {
                name: "three_spheres".into(),
                root,
                background: Background::SkyGradient,
            },
            CameraParameters {
                position,
                target,
                up: Vec3::new(0.0, 1.0, 0.0),
                fov_y: 20.0,
                aperture: 0.1,
                focus_distance: (position - target).len(),
            },
        ))
    }
}

fn random_spectrum(rng: &mut Pcg32, min: f32, max: f32) -> Spectrum {
    Spectrum::new(
        rng.gen_range(min..max),
        rng.gen_range(min..max),
        rng.gen_range(min..max),
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{Background, Scene, SceneType};
    use crate::math::{point3, vec3, Ray, Spectrum};

    #[test]
    fn backgrounds() {
        let up = Ray::new(point3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
        let down = Ray::new(point3(0.0, 0.0, 0.0), vec3(0.0, -1.0, 0.0));

        let solid = Background::Solid(Spectrum::new(0.1, 0.2, 0.3));
        assert_eq!(solid.sample(up), Spectrum::new(0.1, 0.2, 0.3));
        assert_eq!(solid.sample(down), Spectrum::new(0.1, 0.2, 0.3));

        // The gradient blends from white at the bottom to blue at the top
        assert_abs_diff_eq!(Background::SkyGradient.sample(up), Spectrum::new(0.5, 0.7, 1.0));
        assert_abs_diff_eq!(Background::SkyGradient.sample(down), Spectrum::ones());
    }

    #[test]
    fn builtin_scenes_construct() {
        for scene_type in [
            SceneType::RandomSpheres,
            SceneType::SolarSystem,
            SceneType::ThreeSpheres,
        ] {
            let (scene, camera_params) = Scene::load(scene_type).unwrap();
            assert!(scene.root.world_bound().is_some());
            assert!(camera_params.focus_distance > 0.0);
        }
    }

    #[test]
    fn scene_construction_is_deterministic() {
        let (a, _) = Scene::random_spheres().unwrap();
        let (b, _) = Scene::random_spheres().unwrap();
        let bb_a = a.root.world_bound().unwrap();
        let bb_b = b.root.world_bound().unwrap();
        assert_eq!(bb_a, bb_b);
    }
}

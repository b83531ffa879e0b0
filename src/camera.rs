use crate::{
    film::FilmSettings,
    math::{Point2, Point3, Ray, Vec3},
    sampling::concentric_sample_disk,
};

// Based on Ray Tracing in One Weekend
// https://raytracing.github.io/books/RayTracingInOneWeekend.html#defocusblur

/// Values needed to specify a camera ray.
pub struct CameraSample {
    /// Normalized image plane position, `[0, 1]²`, origin at the bottom left
    pub p_film: Point2,
    /// Lens position, `[0, 1)²`
    pub p_lens: Point2,
}

#[derive(Copy, Clone, Debug)]
pub struct CameraParameters {
    pub position: Point3,
    pub target: Point3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_y: f32,
    pub aperture: f32,
    pub focus_distance: f32,
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 1.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_y: 40.0,
            aperture: 0.0,
            focus_distance: 1.0,
        }
    }
}

/// A thin lens camera.
#[derive(Clone)]
pub struct Camera {
    origin: Point3,
    lower_left: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Creates a new `Camera` facing `params.target` with the aspect ratio of
    /// `film_settings`.
    pub fn new(params: CameraParameters, film_settings: FilmSettings) -> Self {
        let aspect_ratio = film_settings.width as f32 / film_settings.height as f32;

        let h = (params.fov_y.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        // Orthonormal basis around the view direction
        let w = (params.position - params.target).normalized();
        let u = params.up.cross(w).normalized();
        let v = w.cross(u);

        // The viewport sits on the focus plane so lens offsets pivot around it
        let horizontal = u * (viewport_width * params.focus_distance);
        let vertical = v * (viewport_height * params.focus_distance);
        let lower_left =
            params.position - horizontal / 2.0 - vertical / 2.0 - w * params.focus_distance;

        Self {
            origin: params.position,
            lower_left,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: params.aperture / 2.0,
        }
    }

    /// Creates a new [Ray] through the camera sample.
    pub fn ray(&self, sample: &CameraSample) -> Ray {
        let d = concentric_sample_disk(sample.p_lens);
        let offset = self.u * (d.x * self.lens_radius) + self.v * (d.y * self.lens_radius);

        let origin = self.origin + offset;
        let direction = (self.lower_left
            + self.horizontal * sample.p_film.x
            + self.vertical * sample.p_film.y)
            - origin;
        Ray::new(origin, direction)
    }
}

mod render_worker;

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc::channel,
        Arc, Mutex,
    },
    time::Instant,
};

use serde::{Deserialize, Serialize};

use crate::{
    camera::Camera,
    film::Film,
    integrators::IntegratorType,
    lumi_debug, lumi_info,
    sampling::Sampler,
    scene::Scene,
};

pub use render_worker::Message;

/// The settings for a render.
#[derive(Debug, Default, Copy, Clone, Deserialize, Serialize)]
pub struct RenderSettings {
    /// Worker thread count. 0 picks the hardware parallelism.
    pub threads: usize,
}

pub struct RenderStats {
    pub ray_count: usize,
    pub elapsed_s: f32,
}

/// Renders `scene` into `film`, blocking until every worker has finished.
///
/// Rows are assigned to the fixed worker pool round robin so each thread gets
/// a spatially distributed share of the image.
pub fn render(
    scene: &Arc<Scene>,
    camera: &Camera,
    film: &Arc<Mutex<Film>>,
    sampler: &Arc<dyn Sampler>,
    integrator: IntegratorType,
    settings: RenderSettings,
) -> RenderStats {
    let (width, height) = {
        let film = film.lock().unwrap();
        (film.width(), film.height())
    };

    let thread_count = if settings.threads == 0 {
        num_cpus::get()
    } else {
        settings.threads
    }
    .min(height as usize)
    .max(1);

    let total_pixels = (width as usize) * (height as usize);
    let progress = Arc::new(AtomicUsize::new(0));

    lumi_info!(
        "Rendering {}x{} at {} samples with {} threads",
        width,
        height,
        sampler.samples_per_pixel(),
        thread_count
    );

    let render_start = Instant::now();
    let (to_parent, from_workers) = channel();

    let workers: Vec<_> = (0..thread_count)
        .map(|thread_id| {
            let scene = Arc::clone(scene);
            let camera = camera.clone();
            let film = Arc::clone(film);
            // Every worker draws from its own uncorrelated stream of the
            // configured generator
            let sampler = sampler.as_ref().clone(thread_id as u64);
            let progress = Arc::clone(&progress);
            let to_parent = to_parent.clone();
            std::thread::Builder::new()
                .name(format!("RenderWorker{}", thread_id))
                .spawn(move || {
                    render_worker::launch(
                        thread_id,
                        thread_count,
                        &scene,
                        &camera,
                        &film,
                        sampler,
                        integrator,
                        &progress,
                        &to_parent,
                    );
                })
                .expect("Failed to spawn RenderWorker")
        })
        .collect();
    drop(to_parent);

    let mut ray_count = 0;
    let mut rows_done = 0;
    let mut logged_percent = 0;
    while rows_done < height {
        match from_workers.recv() {
            Ok(Message::RowDone {
                thread_id,
                y,
                ray_count: rays,
            }) => {
                lumi_debug!("Render thread {}: Row {} done", thread_id, y);
                rows_done += 1;
                ray_count += rays;

                let percent = 100 * progress.load(Ordering::Relaxed) / total_pixels;
                if percent >= logged_percent + 10 {
                    logged_percent = percent - percent % 10;
                    lumi_info!("Render progress {}%", logged_percent);
                }
            }
            Err(_) => panic!("Renderer: Workers disconnected mid render"),
        }
    }

    for handle in workers {
        handle.join().expect("RenderWorker panicked");
    }

    let stats = RenderStats {
        ray_count,
        elapsed_s: render_start.elapsed().as_secs_f32(),
    };
    lumi_info!(
        "Render finished in {:.2}s, {} rays",
        stats.elapsed_s,
        stats.ray_count
    );
    stats
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::{render, RenderSettings};
    use crate::{
        camera::Camera,
        film::{Film, FilmSettings},
        integrators::{IntegratorType, PathParams},
        materials::Matte,
        math::{point3, Spectrum},
        sampling::{create_sampler, SamplerSettings},
        scene::{Background, Scene},
        shapes::{ShapeList, Sphere},
        textures::ConstantTexture,
    };

    fn render_pixels(scene: Scene, settings: RenderSettings) -> Vec<Spectrum> {
        let scene = Arc::new(scene);
        let (camera_params, film_settings) = (
            crate::camera::CameraParameters {
                position: point3(0.0, 0.0, 2.0),
                target: point3(0.0, 0.0, -1.0),
                focus_distance: 3.0,
                ..Default::default()
            },
            FilmSettings {
                width: 16,
                height: 9,
            },
        );
        let film = Arc::new(Mutex::new(Film::new(film_settings)));
        let camera = Camera::new(camera_params, film_settings);
        let sampler = create_sampler(SamplerSettings::Uniform {
            pixel_samples: 2,
            seed: 0x1234,
        });

        let stats = render(
            &scene,
            &camera,
            &film,
            &sampler,
            IntegratorType::Path(PathParams { max_depth: 4 }),
            settings,
        );
        assert!(stats.ray_count > 0);

        let film = film.lock().unwrap();
        film.pixels().to_vec()
    }

    // One convex diffuse sphere under the sky gradient: every path either
    // misses into the gradient or leaves the surface on the second ray, so
    // every pixel ends up non-black
    fn single_sphere_scene() -> Scene {
        let mut list = ShapeList::new();
        list.add(Arc::new(Sphere::new(
            point3(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Matte::new(Arc::new(ConstantTexture::new(Spectrum::new(
                0.5, 0.5, 0.5,
            ))))),
        )));
        Scene {
            name: "single_sphere".into(),
            root: Arc::new(list),
            background: Background::SkyGradient,
        }
    }

    #[test]
    fn every_pixel_is_written() {
        let pixels = render_pixels(single_sphere_scene(), RenderSettings { threads: 3 });
        assert!(pixels.iter().all(|px| !px.is_black()));
    }

    #[test]
    fn repeated_renders_match() {
        let settings = RenderSettings { threads: 2 };
        let a = render_pixels(single_sphere_scene(), settings);
        let b = render_pixels(single_sphere_scene(), settings);
        assert_eq!(a, b);
    }

    #[test]
    fn single_thread_matches_itself() {
        let settings = RenderSettings { threads: 1 };
        let a = render_pixels(single_sphere_scene(), settings);
        let b = render_pixels(single_sphere_scene(), settings);
        assert_eq!(a, b);
    }
}

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    mpsc::Sender,
    Arc, Mutex,
};

use crate::{
    camera::Camera,
    film::Film,
    integrators::IntegratorType,
    lumi_debug, lumi_error, lumi_trace,
    math::Spectrum,
    sampling::Sampler,
    scene::Scene,
};

pub enum Message {
    RowDone {
        thread_id: usize,
        y: u32,
        ray_count: usize,
    },
}

/// Worker loop: renders every film row owned by `thread_id`, i.e. rows
/// interleaved round robin over the pool.
#[allow(clippy::too_many_arguments)]
pub fn launch(
    thread_id: usize,
    thread_count: usize,
    scene: &Arc<Scene>,
    camera: &Camera,
    film: &Arc<Mutex<Film>>,
    mut sampler: Box<dyn Sampler>,
    integrator: IntegratorType,
    progress: &AtomicUsize,
    to_parent: &Sender<Message>,
) {
    lumi_debug!("Render thread {}: Begin", thread_id);

    let (width, height) = {
        let film = film.lock().unwrap();
        (film.width(), film.height())
    };

    let integrator = integrator.instantiate();
    let mut row_pixels = vec![Spectrum::zeros(); width as usize];

    let mut y = thread_id as u32;
    while y < height {
        lumi_trace!("Render thread {}: Render row {}", thread_id, y);
        let ray_count = integrator.render_row(
            scene,
            camera,
            sampler.as_mut(),
            y,
            width,
            height,
            &mut row_pixels,
            &mut || {
                progress.fetch_add(1, Ordering::Relaxed);
            },
        );

        {
            lumi_trace!("Render thread {}: Waiting for lock on film", thread_id);
            let mut film = film.lock().unwrap();
            film.update_row(y, &row_pixels);
            lumi_trace!("Render thread {}: Releasing film", thread_id);
        }

        if let Err(why) = to_parent.send(Message::RowDone {
            thread_id,
            y,
            ray_count,
        }) {
            lumi_error!(
                "Render thread {}: Error notifying parent on row done: {}",
                thread_id,
                why
            );
        }

        y += thread_count as u32;
    }

    lumi_debug!("Render thread {}: Done", thread_id);
}

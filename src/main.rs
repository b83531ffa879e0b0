use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use lumi::{
    camera::Camera,
    expect,
    film::{Film, FilmSettings},
    integrators::IntegratorType,
    lumi_info,
    math::Spectrum,
    renderer::{self, RenderSettings},
    sampling::{create_sampler, SamplerSettings},
    scene::{Scene, SceneType},
};

/// Top level render configuration, read from a YAML file when one is given on
/// the command line.
#[derive(Debug, Default, Copy, Clone, Deserialize, Serialize)]
#[serde(default)]
struct RenderConfig {
    scene: SceneType,
    film: FilmSettings,
    sampler: SamplerSettings,
    integrator: IntegratorType,
    renderer: RenderSettings,
}

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        // .level(log::LevelFilter::Debug)
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("lumi.log")?)
        .apply()?;
    Ok(())
}

fn load_config() -> Result<RenderConfig, String> {
    match std::env::args().nth(1) {
        Some(path) => {
            let file = std::fs::File::open(&path)
                .map_err(|why| format!("Failed to open config '{}': {}", path, why))?;
            serde_yaml::from_reader(file)
                .map_err(|why| format!("Failed to parse config '{}': {}", path, why))
        }
        None => Ok(RenderConfig::default()),
    }
}

fn png_path(scene_name: &str) -> Result<PathBuf, String> {
    match std::env::current_dir() {
        Ok(mut path) => {
            let now = chrono::Local::now();
            let timestamp = format!(
                "{:04}{:02}{:02}_{:02}{:02}{:02}",
                now.year(),
                now.month(),
                now.day(),
                now.hour(),
                now.minute(),
                now.second()
            );
            path.push(format!("{}_{}.png", scene_name, timestamp));
            Ok(path)
        }
        Err(why) => Err(format!("Error getting current working directory: {:?}", why)),
    }
}

fn write_png(width: u32, height: u32, pixels: &[Spectrum], path: &Path) -> Result<(), String> {
    lumi_info!("Writing out PNG");

    // Gamma 2 and 8bit quantization happen here, the film stays linear
    let mut img = image::RgbImage::new(width, height);
    for (x, y, px) in img.enumerate_pixels_mut() {
        let color = pixels[(y * width + x) as usize];
        *px = image::Rgb([
            (color.r.max(0.0).sqrt().min(1.0) * 255.0) as u8,
            (color.g.max(0.0).sqrt().min(1.0) * 255.0) as u8,
            (color.b.max(0.0).sqrt().min(1.0) * 255.0) as u8,
        ]);
    }

    match img.save(path) {
        Ok(()) => {
            lumi_info!("PNG written to '{}'", path.display());
            Ok(())
        }
        Err(why) => Err(format!(
            "Error writing PNG to '{}': {:?}",
            path.display(),
            why
        )),
    }
}

fn main() {
    if let Err(why) = setup_logger() {
        panic!("{}", why);
    };

    let config = expect!(load_config(), "Config loading failed");

    let (scene, camera_params) = expect!(Scene::load(config.scene), "Scene construction failed");
    let scene = Arc::new(scene);

    let film = Arc::new(Mutex::new(Film::new(config.film)));
    let camera = Camera::new(camera_params, config.film);
    let sampler = create_sampler(config.sampler);

    let stats = renderer::render(
        &scene,
        &camera,
        &film,
        &sampler,
        config.integrator,
        config.renderer,
    );
    lumi_info!(
        "{:.2} Mrays/s",
        stats.ray_count as f32 / stats.elapsed_s.max(1e-6) / 1e6
    );

    let path = expect!(png_path(&scene.name), "Output path lookup failed");
    let film = film.lock().unwrap();
    expect!(
        write_png(film.width(), film.height(), film.pixels(), &path),
        "Image write failed"
    );
}

use std::error::Error;
use std::fs;

use log::info;
use mandelbrot_zoom::{
    AutoZoom, Complex, ExplorerSession, FrameSize, MandelbrotConfig, PpmFilePresenter,
};

const OUTPUT_DIRECTORY: &str = "output";
const ZOOM_TARGET: Complex = Complex::new(-0.743643887037151, 0.131825904205330);
const ZOOM_FACTOR: f64 = 0.1;
const ZOOM_FRAMES: u32 = 30;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MandelbrotConfig::default();
    let size = FrameSize::new(800, 600)?;

    fs::create_dir_all(OUTPUT_DIRECTORY)?;
    let presenter = PpmFilePresenter::new(OUTPUT_DIRECTORY, "mandelbrot");

    info!(
        "rendering {} frames of {} with {} max iterations",
        ZOOM_FRAMES + 1,
        size,
        config.max_iterations
    );

    let mut session = ExplorerSession::new(config, size, presenter)?;
    session.present_frame()?;
    session.start_auto_zoom(AutoZoom::new(ZOOM_TARGET, ZOOM_FACTOR, Some(ZOOM_FRAMES))?);

    while session.tick()? {}

    info!(
        "wrote {} frames to {}/",
        session.frames_presented(),
        OUTPUT_DIRECTORY
    );

    Ok(())
}

use std::fmt;
use std::time::Instant;

use log::debug;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_frame_rayon::render_frame_rayon;
use crate::core::actions::render_frame::render_frame_serial::render_frame_serial;
use crate::core::actions::render_frame::render_frame_striped::render_frame_striped;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::calculate_workers_for_rows::available_workers;

/// How a frame's rows are spread over threads. Every strategy yields the same grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    Serial,
    /// Row `y` goes to worker `y mod N` on scoped threads.
    #[default]
    Striped,
    /// Rows are queued on rayon's global pool.
    WorkStealing,
}

impl RenderStrategy {
    pub const ALL: &'static [Self] = &[Self::Striped, Self::WorkStealing, Self::Serial];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Striped => "striped threads",
            Self::WorkStealing => "work stealing",
        }
    }
}

impl fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Computes every pixel of `size` from scratch and blocks until the grid is complete.
pub fn render_frame<Alg, CMap>(
    viewport: &Viewport,
    size: FrameSize,
    algorithm: &Alg,
    colour_map: &CMap,
    strategy: RenderStrategy,
) -> PixelGrid
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let start = Instant::now();

    let grid = match strategy {
        RenderStrategy::Serial => render_frame_serial(viewport, size, algorithm, colour_map),
        RenderStrategy::Striped => {
            let workers = available_workers();
            debug!("striping {} rows over up to {} workers", size.height(), workers);
            render_frame_striped(viewport, size, algorithm, colour_map, workers)
        }
        RenderStrategy::WorkStealing => render_frame_rayon(viewport, size, algorithm, colour_map),
    };

    debug!(
        "rendered {} frame ({}, {}) in {:?}",
        size,
        strategy,
        colour_map.display_name(),
        start.elapsed()
    );

    grid
}

/// Renders the Mandelbrot set for `viewport` with the striped scheduler.
pub fn render(
    viewport: &Viewport,
    size: FrameSize,
    max_iterations: u32,
    colour_map_kind: MandelbrotColourMapKinds,
) -> Result<PixelGrid, MandelbrotError> {
    let algorithm = MandelbrotAlgorithm::new(max_iterations)?;
    let colour_map = mandelbrot_colour_map_factory(colour_map_kind, max_iterations);

    Ok(render_frame(
        viewport,
        size,
        &algorithm,
        &colour_map,
        RenderStrategy::Striped,
    ))
}

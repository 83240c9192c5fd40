mod controllers;
mod core;
mod presenters;

pub use crate::controllers::explorer::errors::SessionError;
pub use crate::controllers::explorer::ports::frame_sink::FrameSink;
pub use crate::controllers::explorer::session::{CURSOR_ZOOM_FACTOR, ExplorerSession};
pub use crate::core::actions::render_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_frame::render::{RenderStrategy, render, render_frame};
pub use crate::core::actions::render_frame::render_frame_rayon::render_frame_rayon;
pub use crate::core::actions::render_frame::render_frame_serial::render_frame_serial;
pub use crate::core::actions::render_frame::render_frame_striped::render_frame_striped;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_size::{FrameSize, FrameSizeError};
pub use crate::core::data::pixel_grid::{BYTES_PER_PIXEL, PixelGrid, PixelGridError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape_time};
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::{
    MandelbrotColourMapKinds, UnknownColourMapKind,
};
pub use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
pub use crate::core::fractals::mandelbrot::colour_mapping::palette::{BandPalette, CLASSIC_BANDS};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::navigation::{AutoZoom, ZoomLimits, ZoomStepReport, ZoomWarning};
pub use crate::core::util::hsv_to_rgb::hsv_to_rgb;
pub use crate::presenters::file::ppm::{PpmFilePresenter, write_ppm};

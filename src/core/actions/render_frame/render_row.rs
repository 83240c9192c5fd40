use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_grid::BYTES_PER_PIXEL;
use crate::core::data::viewport::Viewport;

/// Fills one row of RGB bytes for pixel row `y`.
///
/// `row` must hold exactly `size.width()` pixels and `y` must be below
/// `size.height()`.
#[inline]
pub(crate) fn render_row<Alg, CMap>(
    y: u32,
    row: &mut [u8],
    viewport: &Viewport,
    size: FrameSize,
    algorithm: &Alg,
    colour_map: &CMap,
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let point = viewport.interpolate(x as u32, y, size);
        let colour = colour_map.map(algorithm.compute(point));

        pixel.copy_from_slice(&colour.to_rgb());
    }
}

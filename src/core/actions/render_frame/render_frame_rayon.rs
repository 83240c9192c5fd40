use rayon::prelude::*;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_row::render_row;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::Viewport;

/// Renders rows in parallel using rayon's work-stealing scheduler.
///
/// Rows are still written through disjoint slices, so the output matches the
/// serial and striped renderers byte for byte.
pub fn render_frame_rayon<Alg, CMap>(
    viewport: &Viewport,
    size: FrameSize,
    algorithm: &Alg,
    colour_map: &CMap,
) -> PixelGrid
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let mut grid = PixelGrid::new(size);
    let row_bytes = grid.row_bytes();

    grid.buffer_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| render_row(y as u32, row, viewport, size, algorithm, colour_map));

    grid
}

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_row::render_row;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::Viewport;

pub fn render_frame_serial<Alg, CMap>(
    viewport: &Viewport,
    size: FrameSize,
    algorithm: &Alg,
    colour_map: &CMap,
) -> PixelGrid
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let mut grid = PixelGrid::new(size);

    for (y, row) in grid.rows_mut().enumerate() {
        render_row(y as u32, row, viewport, size, algorithm, colour_map);
    }

    grid
}

use std::num::NonZeroUsize;
use std::thread;

use log::trace;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_row::render_row;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::Viewport;
use crate::core::util::calculate_workers_for_rows::calculate_workers_for_rows;

type Stripe<'a> = Vec<(u32, &'a mut [u8])>;

/// Hands row `y` to worker `y % workers`.
///
/// Each worker owns a disjoint set of row slices, so the grid needs no locking.
/// The scope joins every worker before the grid is returned.
pub fn render_frame_striped<Alg, CMap>(
    viewport: &Viewport,
    size: FrameSize,
    algorithm: &Alg,
    colour_map: &CMap,
    max_workers: NonZeroUsize,
) -> PixelGrid
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let workers = calculate_workers_for_rows(max_workers, size.height()).get();
    let rows_per_worker = (size.height() as usize).div_ceil(workers);
    let mut grid = PixelGrid::new(size);

    let mut stripes: Vec<Stripe<'_>> = (0..workers)
        .map(|_| Vec::with_capacity(rows_per_worker))
        .collect();

    for (y, row) in grid.rows_mut().enumerate() {
        stripes[y % workers].push((y as u32, row));
    }

    thread::scope(|scope| {
        for (worker, stripe) in stripes.into_iter().enumerate() {
            scope.spawn(move || {
                trace!("worker {} rendering {} rows", worker, stripe.len());

                for (y, row) in stripe {
                    render_row(y, row, viewport, size, algorithm, colour_map);
                }
            });
        }
    });

    grid
}

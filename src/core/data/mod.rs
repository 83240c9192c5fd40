pub mod colour;
pub mod complex;
pub mod frame_size;
pub mod pixel_grid;
pub mod viewport;

pub mod ports;
pub mod render;
pub mod render_frame_rayon;
pub mod render_frame_serial;
pub mod render_frame_striped;
mod render_row;

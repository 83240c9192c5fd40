use crate::core::data::pixel_grid::PixelGrid;

/// Receives each completed frame; displaying or storing it is the sink's business.
pub trait FrameSink {
    fn present(&mut self, frame: &PixelGrid, frame_index: u64) -> std::io::Result<()>;
}

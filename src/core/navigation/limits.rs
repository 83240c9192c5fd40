use crate::core::data::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    /// Smallest viewport width, relative to the magnitude of its centre, that
    /// still leaves f64 enough distinct values per pixel.
    pub min_relative_extent: f64,
}

impl ZoomLimits {
    #[must_use]
    pub fn allows_zoom(&self, viewport: &Viewport) -> bool {
        let center = viewport.center();
        let scale = center.real.abs().max(center.imag.abs()).max(1.0);

        viewport.width() / scale >= self.min_relative_extent
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_relative_extent: 1e-13,
        }
    }
}

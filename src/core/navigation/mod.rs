pub mod auto_zoom;
pub mod limits;

pub use auto_zoom::{AutoZoom, ZoomStepReport, ZoomWarning};
pub use limits::ZoomLimits;

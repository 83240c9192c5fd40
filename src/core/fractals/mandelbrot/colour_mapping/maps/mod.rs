pub mod banded_gradient;
pub mod continuous_hue;

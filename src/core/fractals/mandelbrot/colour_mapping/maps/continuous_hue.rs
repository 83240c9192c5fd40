use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::util::hsv_to_rgb::hsv_to_rgb;

const REFERENCE_ITERATIONS: f64 = 100.0;
const CURVE_EXPONENT: f64 = 0.9;
const HUE_RANGE: f64 = 360.0;
pub const SATURATION: f64 = 0.85;
pub const VALUE: f64 = 0.95;

#[derive(Debug)]
pub struct MandelbrotContinuousHue {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotContinuousHue {
    fn map(&self, iterations: u32) -> Colour {
        if iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        hsv_to_rgb(hue_for(iterations), SATURATION, VALUE)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotContinuousHue {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::ContinuousHue
    }
}

impl MandelbrotContinuousHue {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

fn hue_for(iterations: u32) -> f64 {
    let normalised = f64::from(iterations) / REFERENCE_ITERATIONS;

    (normalised.powf(CURVE_EXPONENT) * HUE_RANGE).rem_euclid(HUE_RANGE)
}

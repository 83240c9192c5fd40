use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::{
        banded_gradient::MandelbrotBandedGradient, continuous_hue::MandelbrotContinuousHue,
    },
    palette::CLASSIC_BANDS,
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::ContinuousHue => {
            Box::new(MandelbrotContinuousHue::new(max_iterations))
        }
        MandelbrotColourMapKinds::BandedGradient => {
            Box::new(MandelbrotBandedGradient::new(max_iterations, &CLASSIC_BANDS))
        }
    }
}

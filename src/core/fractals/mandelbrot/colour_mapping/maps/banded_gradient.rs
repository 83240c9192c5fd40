use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::palette::{BandPalette, BAND_COUNT};

/// Splits `[0, max_iterations)` into equal bands and blends linearly between
/// the palette anchors of each band.
#[derive(Debug)]
pub struct MandelbrotBandedGradient<'p> {
    max_iterations: u32,
    palette: &'p BandPalette,
}

impl ColourMap<u32> for MandelbrotBandedGradient<'_> {
    fn map(&self, iterations: u32) -> Colour {
        if iterations >= self.max_iterations {
            return self.palette.terminal();
        }

        let scaled = f64::from(iterations) * BAND_COUNT as f64 / f64::from(self.max_iterations);
        let band = scaled.floor() as usize;
        let (start, end) = self.palette.band(band);

        start.lerp(end, scaled - band as f64)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotBandedGradient<'_> {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::BandedGradient
    }
}

impl<'p> MandelbrotBandedGradient<'p> {
    #[must_use]
    pub fn new(max_iterations: u32, palette: &'p BandPalette) -> Self {
        Self {
            max_iterations,
            palette,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::colour_mapping::palette::CLASSIC_BANDS;

    #[test]
    fn test_map_returns_black_at_max_iterations() {
        let mapper = MandelbrotBandedGradient::new(100, &CLASSIC_BANDS);

        assert_eq!(mapper.map(100), Colour::BLACK);
    }

    #[test]
    fn test_map_above_max_is_treated_as_inside() {
        let mapper = MandelbrotBandedGradient::new(100, &CLASSIC_BANDS);

        assert_eq!(mapper.map(250), Colour::BLACK);
    }

    #[test]
    fn test_map_zero_is_first_anchor() {
        let mapper = MandelbrotBandedGradient::new(100, &CLASSIC_BANDS);

        assert_eq!(mapper.map(0), CLASSIC_BANDS.first());
    }

    #[test]
    fn test_band_boundaries_hit_anchors_exactly() {
        let mapper = MandelbrotBandedGradient::new(60, &CLASSIC_BANDS);

        for band in 0..BAND_COUNT {
            let iterations = (band * 10) as u32;
            assert_eq!(mapper.map(iterations), CLASSIC_BANDS.anchors()[band]);
        }
    }

    #[test]
    fn test_map_interpolates_within_band() {
        let mapper = MandelbrotBandedGradient::new(60, &CLASSIC_BANDS);

        // halfway between blue and turquoise
        assert_eq!(mapper.map(5), Colour::new(34, 146, 192));
    }

    #[test]
    fn test_last_band_approaches_black() {
        let mapper = MandelbrotBandedGradient::new(60, &CLASSIC_BANDS);
        let colour = mapper.map(59);

        assert!(colour.r < 20);
        assert!(colour.g < 5);
        assert_eq!(colour.b, 0);
    }

    #[test]
    fn test_custom_palette_is_used() {
        let grey = BandPalette::new([Colour::new(200, 200, 200); BAND_COUNT + 1]);
        let mapper = MandelbrotBandedGradient::new(12, &grey);

        assert_eq!(mapper.map(7), Colour::new(200, 200, 200));
        assert_eq!(mapper.map(12), Colour::new(200, 200, 200));
    }
}

use crate::core::data::colour::Colour;

pub const BAND_COUNT: usize = 6;

/// Ordered anchor colours for the banded gradient; band `n` runs from
/// anchor `n` to anchor `n + 1`, and the last anchor colours the set itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandPalette {
    anchors: [Colour; BAND_COUNT + 1],
}

impl BandPalette {
    #[must_use]
    pub const fn new(anchors: [Colour; BAND_COUNT + 1]) -> Self {
        Self { anchors }
    }

    #[must_use]
    pub fn anchors(&self) -> &[Colour; BAND_COUNT + 1] {
        &self.anchors
    }

    #[must_use]
    pub fn first(&self) -> Colour {
        self.anchors[0]
    }

    #[must_use]
    pub fn terminal(&self) -> Colour {
        self.anchors[BAND_COUNT]
    }

    /// Start and end anchors of `band`, clamped to the last band.
    #[must_use]
    pub fn band(&self, band: usize) -> (Colour, Colour) {
        let band = band.min(BAND_COUNT - 1);
        (self.anchors[band], self.anchors[band + 1])
    }
}

pub static CLASSIC_BANDS: BandPalette = BandPalette::new([
    Colour::new(34, 69, 207),  // blue
    Colour::new(33, 222, 177), // turquoise
    Colour::new(100, 240, 34), // green
    Colour::new(232, 226, 42), // yellow
    Colour::new(222, 100, 16), // orange
    Colour::new(160, 16, 0),   // red
    Colour::BLACK,
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_bands_end_in_black() {
        assert_eq!(CLASSIC_BANDS.terminal(), Colour::BLACK);
        assert_eq!(CLASSIC_BANDS.first(), Colour::new(34, 69, 207));
    }

    #[test]
    fn band_returns_adjacent_anchors() {
        let (start, end) = CLASSIC_BANDS.band(2);

        assert_eq!(start, CLASSIC_BANDS.anchors()[2]);
        assert_eq!(end, CLASSIC_BANDS.anchors()[3]);
    }

    #[test]
    fn band_past_the_end_is_clamped_to_last_band() {
        assert_eq!(
            CLASSIC_BANDS.band(BAND_COUNT + 3),
            (Colour::new(160, 16, 0), Colour::BLACK)
        );
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation per channel, `t = 0` gives `self`, `t = 1` gives `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
        }
    }

    #[must_use]
    #[inline]
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);

    (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let from = Colour::new(34, 69, 207);
        let to = Colour::new(33, 222, 177);

        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
    }

    #[test]
    fn test_lerp_midpoint_rounds_to_nearest() {
        let from = Colour::new(34, 69, 207);
        let to = Colour::new(33, 222, 177);

        assert_eq!(from.lerp(to, 0.5), Colour::new(34, 146, 192));
    }

    #[test]
    fn test_lerp_towards_black() {
        let red = Colour::new(160, 16, 0);

        assert_eq!(red.lerp(Colour::BLACK, 0.5), Colour::new(80, 8, 0));
    }

    #[test]
    fn test_to_rgb() {
        assert_eq!(Colour::new(1, 2, 3).to_rgb(), [1, 2, 3]);
    }
}

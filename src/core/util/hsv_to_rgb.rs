use crate::core::data::colour::Colour;

/// Converts hue (degrees, wrapped into `[0, 360)`), saturation and value
/// (both `[0, 1]`) to an 8-bit RGB colour using the six 60° hue sectors.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    let hue = hue.rem_euclid(360.0);
    let chroma = value * saturation;
    let sector = hue / 60.0;
    let second = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());

    let (r, g, b) = match sector as u32 {
        0 => (chroma, second, 0.0),
        1 => (second, chroma, 0.0),
        2 => (0.0, chroma, second),
        3 => (0.0, second, chroma),
        4 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };

    let min = value - chroma;

    Colour {
        r: to_channel(r + min),
        g: to_channel(g + min),
        b: to_channel(b + min),
    }
}

fn to_channel(component: f64) -> u8 {
    (component * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Colour::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Colour::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Colour::new(0, 0, 255));
    }

    #[test]
    fn secondary_hues() {
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), Colour::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), Colour::new(0, 255, 255));
        assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), Colour::new(255, 0, 255));
    }

    #[test]
    fn hue_wraps_around() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(-120.0, 1.0, 1.0), hsv_to_rgb(240.0, 1.0, 1.0));
    }

    #[test]
    fn zero_value_is_black() {
        assert_eq!(hsv_to_rgb(200.0, 0.7, 0.0), Colour::BLACK);
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert_eq!(hsv_to_rgb(75.0, 0.0, 0.5), Colour::new(128, 128, 128));
    }

    #[test]
    fn nan_hue_does_not_panic() {
        let _ = hsv_to_rgb(f64::NAN, 1.0, 1.0);
    }
}

use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonFiniteCorner {
        upper_left: Complex,
        lower_right: Complex,
    },
    InvalidOrientation {
        width: f64,
        height: f64,
    },
    PixelOutsideFrame {
        x: u32,
        y: u32,
        size: FrameSize,
    },
    InvalidZoomFactor {
        factor: f64,
    },
    NonFiniteTarget {
        target: Complex,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCorner {
                upper_left,
                lower_right,
            } => {
                write!(
                    f,
                    "viewport corners must be finite: upper-left ({}, {}) lower-right ({}, {})",
                    upper_left.real, upper_left.imag, lower_right.real, lower_right.imag
                )
            }
            Self::InvalidOrientation { width, height } => {
                write!(
                    f,
                    "viewport extent must be positive with the imaginary axis pointing up: {}x{}",
                    width, height
                )
            }
            Self::PixelOutsideFrame { x, y, size } => {
                write!(f, "pixel (x: {}, y: {}) is outside the {} frame", x, y, size)
            }
            Self::InvalidZoomFactor { factor } => {
                write!(f, "zoom factor must lie strictly between 0 and 1: {}", factor)
            }
            Self::NonFiniteTarget { target } => {
                write!(
                    f,
                    "zoom target must be finite: ({}, {})",
                    target.real, target.imag
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangle of the complex plane mapped onto the pixel grid.
///
/// `upper_left` maps to pixel (0, 0). The imaginary axis is inverted relative
/// to screen rows, so `upper_left.imag > lower_right.imag`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    upper_left: Complex,
    lower_right: Complex,
}

impl Viewport {
    pub fn new(upper_left: Complex, lower_right: Complex) -> Result<Self, ViewportError> {
        if !upper_left.is_finite() || !lower_right.is_finite() {
            return Err(ViewportError::NonFiniteCorner {
                upper_left,
                lower_right,
            });
        }

        let width = lower_right.real - upper_left.real;
        let height = upper_left.imag - lower_right.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidOrientation { width, height });
        }

        Ok(Self {
            upper_left,
            lower_right,
        })
    }

    #[must_use]
    pub fn upper_left(&self) -> Complex {
        self.upper_left
    }

    #[must_use]
    pub fn lower_right(&self) -> Complex {
        self.lower_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.lower_right.real - self.upper_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.upper_left.imag - self.lower_right.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.upper_left.real + self.lower_right.real) * 0.5,
            imag: (self.upper_left.imag + self.lower_right.imag) * 0.5,
        }
    }

    pub fn pixel_to_complex(&self, x: u32, y: u32, size: FrameSize) -> Result<Complex, ViewportError> {
        if !size.contains(x, y) {
            return Err(ViewportError::PixelOutsideFrame { x, y, size });
        }

        Ok(self.interpolate(x, y, size))
    }

    /// Unchecked pixel mapping for callers that have already bounded `x` and `y`.
    #[inline]
    pub(crate) fn interpolate(&self, x: u32, y: u32, size: FrameSize) -> Complex {
        let ratio_x = f64::from(x) / f64::from(size.width());
        let ratio_y = f64::from(y) / f64::from(size.height());

        Complex {
            real: self.upper_left.real
                + ratio_x * (self.lower_right.real - self.upper_left.real),
            imag: self.upper_left.imag
                + ratio_y * (self.lower_right.imag - self.upper_left.imag),
        }
    }

    pub fn zoom_toward_cursor(
        &mut self,
        x: u32,
        y: u32,
        size: FrameSize,
        factor: f64,
    ) -> Result<(), ViewportError> {
        validate_zoom_factor(factor)?;
        let anchor = self.pixel_to_complex(x, y, size)?;

        self.contract_toward(anchor, factor);
        Ok(())
    }

    pub fn zoom_toward_target(&mut self, target: Complex, factor: f64) -> Result<(), ViewportError> {
        validate_zoom_factor(factor)?;

        if !target.is_finite() {
            return Err(ViewportError::NonFiniteTarget { target });
        }

        self.contract_toward(target, factor);
        Ok(())
    }

    fn contract_toward(&mut self, anchor: Complex, factor: f64) {
        self.upper_left = self.upper_left.approach(anchor, factor);
        self.lower_right = self.lower_right.approach(anchor, factor);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            upper_left: Complex::new(-2.5, 1.0),
            lower_right: Complex::new(1.0, -1.0),
        }
    }
}

pub(crate) fn validate_zoom_factor(factor: f64) -> Result<(), ViewportError> {
    if factor > 0.0 && factor < 1.0 {
        Ok(())
    } else {
        Err(ViewportError::InvalidZoomFactor { factor })
    }
}

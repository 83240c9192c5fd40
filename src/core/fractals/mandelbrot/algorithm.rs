use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Squared escape radius: `|z|² >= 4` is `|z| >= 2` without the square root.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts the `z ← z² + c` updates that complete before the orbit escapes.
///
/// Returns a value in `[0, max_iterations]`; `max_iterations` means the point
/// never escaped. NaN orbits never satisfy the escape test and therefore run
/// the full budget.
#[must_use]
#[inline]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z.square() + c;
        if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    #[inline]
    fn compute(&self, point: Complex) -> Self::Success {
        escape_time(point, self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

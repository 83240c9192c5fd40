use log::warn;

use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError, validate_zoom_factor};
use crate::core::navigation::limits::ZoomLimits;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomWarning {
    PrecisionLimitReached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoomStepReport {
    pub applied: bool,
    pub warning: Option<ZoomWarning>,
}

/// An unattended zoom: one contraction toward `target` per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoZoom {
    target: Complex,
    factor: f64,
    frames_remaining: Option<u32>,
    finished: bool,
}

impl AutoZoom {
    /// `frames` of `None` zooms until the precision limit stops it.
    pub fn new(target: Complex, factor: f64, frames: Option<u32>) -> Result<Self, ViewportError> {
        validate_zoom_factor(factor)?;

        if !target.is_finite() {
            return Err(ViewportError::NonFiniteTarget { target });
        }

        Ok(Self {
            target,
            factor,
            frames_remaining: frames,
            finished: frames == Some(0),
        })
    }

    #[must_use]
    pub fn target(&self) -> Complex {
        self.target
    }

    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    #[must_use]
    pub fn frames_remaining(&self) -> Option<u32> {
        self.frames_remaining
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn step(&mut self, viewport: &mut Viewport, limits: &ZoomLimits) -> ZoomStepReport {
        let mut report = ZoomStepReport::default();

        if self.finished {
            return report;
        }

        if !limits.allows_zoom(viewport) {
            warn!(
                "auto zoom stopped at width {:e}: f64 precision limit reached",
                viewport.width()
            );
            self.finished = true;
            report.warning = Some(ZoomWarning::PrecisionLimitReached);
            return report;
        }

        // factor and target were validated in `new`
        if viewport.zoom_toward_target(self.target, self.factor).is_err() {
            self.finished = true;
            return report;
        }
        report.applied = true;

        if let Some(remaining) = self.frames_remaining.as_mut() {
            *remaining -= 1;
            if *remaining == 0 {
                self.finished = true;
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEAHORSE: Complex = Complex::new(-0.743643887037151, 0.131825904205330);

    #[test]
    fn new_rejects_invalid_factor_and_target() {
        assert!(matches!(
            AutoZoom::new(SEAHORSE, 1.0, None),
            Err(ViewportError::InvalidZoomFactor { .. })
        ));
        assert!(matches!(
            AutoZoom::new(Complex::new(f64::INFINITY, 0.0), 0.1, None),
            Err(ViewportError::NonFiniteTarget { .. })
        ));
    }

    #[test]
    fn step_applies_one_contraction() {
        let mut zoom = AutoZoom::new(SEAHORSE, 0.1, Some(3)).unwrap();
        let mut viewport = Viewport::default();
        let mut expected = Viewport::default();
        expected.zoom_toward_target(SEAHORSE, 0.1).unwrap();

        let report = zoom.step(&mut viewport, &ZoomLimits::default());

        assert!(report.applied);
        assert_eq!(report.warning, None);
        assert_eq!(viewport, expected);
        assert_eq!(zoom.frames_remaining(), Some(2));
    }

    #[test]
    fn finishes_after_frame_budget() {
        let mut zoom = AutoZoom::new(SEAHORSE, 0.2, Some(2)).unwrap();
        let mut viewport = Viewport::default();
        let limits = ZoomLimits::default();

        assert!(zoom.step(&mut viewport, &limits).applied);
        assert!(!zoom.is_finished());
        assert!(zoom.step(&mut viewport, &limits).applied);
        assert!(zoom.is_finished());

        let frozen = viewport;
        let report = zoom.step(&mut viewport, &limits);

        assert!(!report.applied);
        assert_eq!(viewport, frozen);
    }

    #[test]
    fn zero_frames_is_already_finished() {
        let zoom = AutoZoom::new(SEAHORSE, 0.1, Some(0)).unwrap();

        assert!(zoom.is_finished());
    }

    #[test]
    fn unbounded_zoom_stops_at_precision_limit() {
        let mut zoom = AutoZoom::new(SEAHORSE, 0.5, None).unwrap();
        let mut viewport = Viewport::default();
        let limits = ZoomLimits::default();
        let mut last = ZoomStepReport::default();
        let mut steps = 0;

        while !zoom.is_finished() && steps < 1000 {
            last = zoom.step(&mut viewport, &limits);
            steps += 1;
        }

        assert!(zoom.is_finished());
        assert!(steps < 1000);
        assert_eq!(last.warning, Some(ZoomWarning::PrecisionLimitReached));
        assert!(viewport.upper_left().real < viewport.lower_right().real);
        assert!(viewport.upper_left().imag > viewport.lower_right().imag);
    }

    #[test]
    fn zoom_converges_on_target() {
        let mut zoom = AutoZoom::new(SEAHORSE, 0.1, Some(100)).unwrap();
        let mut viewport = Viewport::default();
        let limits = ZoomLimits::default();

        while !zoom.is_finished() {
            zoom.step(&mut viewport, &limits);
        }

        let center = viewport.center();
        assert!((center.real - SEAHORSE.real).abs() < viewport.width());
        assert!((center.imag - SEAHORSE.imag).abs() < viewport.height());
        assert!(viewport.width() < Viewport::default().width() * 1e-4);
    }
}

use log::{info, warn};

use crate::controllers::explorer::errors::SessionError;
use crate::controllers::explorer::ports::frame_sink::FrameSink;
use crate::core::actions::render_frame::render::{RenderStrategy, render_frame};
use crate::core::data::frame_size::FrameSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::navigation::{AutoZoom, ZoomLimits, ZoomStepReport, ZoomWarning};

/// Fraction of the way each corner moves toward the cursor per click.
pub const CURSOR_ZOOM_FACTOR: f64 = 0.1;

/// Host-side frame loop state.
///
/// Owns the viewport and iteration budget and only changes them between
/// renders, so every frame sees one consistent snapshot.
pub struct ExplorerSession<S: FrameSink> {
    config: MandelbrotConfig,
    size: FrameSize,
    strategy: RenderStrategy,
    limits: ZoomLimits,
    auto_zoom: Option<AutoZoom>,
    sink: S,
    frames_presented: u64,
    needs_redraw: bool,
}

impl<S: FrameSink> ExplorerSession<S> {
    pub fn new(config: MandelbrotConfig, size: FrameSize, sink: S) -> Result<Self, SessionError> {
        config.validate()?;

        Ok(Self {
            config,
            size,
            strategy: RenderStrategy::default(),
            limits: ZoomLimits::default(),
            auto_zoom: None,
            sink,
            frames_presented: 0,
            needs_redraw: true,
        })
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: RenderStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: ZoomLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn config(&self) -> &MandelbrotConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.config.viewport
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    #[must_use]
    pub fn is_auto_zooming(&self) -> bool {
        self.auto_zoom.is_some()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn zoom_at_cursor(&mut self, x: u32, y: u32) -> Result<ZoomStepReport, SessionError> {
        if !self.limits.allows_zoom(&self.config.viewport) {
            warn!("ignoring zoom at ({}, {}): f64 precision limit reached", x, y);
            return Ok(ZoomStepReport {
                applied: false,
                warning: Some(ZoomWarning::PrecisionLimitReached),
            });
        }

        self.config
            .viewport
            .zoom_toward_cursor(x, y, self.size, CURSOR_ZOOM_FACTOR)?;
        self.needs_redraw = true;

        Ok(ZoomStepReport {
            applied: true,
            warning: None,
        })
    }

    pub fn sharpen(&mut self) {
        self.config.sharpen();
        info!("max iterations raised to {}", self.config.max_iterations);
        self.needs_redraw = true;
    }

    pub fn blur(&mut self) {
        let before = self.config.max_iterations;
        self.config.blur();

        if self.config.max_iterations != before {
            info!("max iterations lowered to {}", self.config.max_iterations);
            self.needs_redraw = true;
        }
    }

    pub fn set_colour_map_kind(&mut self, kind: MandelbrotColourMapKinds) {
        if self.config.colour_map_kind != kind {
            self.config.colour_map_kind = kind;
            self.needs_redraw = true;
        }
    }

    pub fn reset_view(&mut self) {
        self.config.reset_view();
        self.auto_zoom = None;
        self.needs_redraw = true;
    }

    pub fn start_auto_zoom(&mut self, zoom: AutoZoom) {
        if zoom.is_finished() {
            return;
        }

        info!(
            "auto zoom toward ({}, {}) by {} per frame",
            zoom.target().real,
            zoom.target().imag,
            zoom.factor()
        );
        self.auto_zoom = Some(zoom);
    }

    /// Advances any running auto zoom by one step and presents a frame if
    /// anything changed. Returns whether a frame was presented.
    pub fn tick(&mut self) -> Result<bool, SessionError> {
        let mut auto_zoom_finished = false;

        if let Some(zoom) = self.auto_zoom.as_mut() {
            let report = zoom.step(&mut self.config.viewport, &self.limits);

            if report.applied {
                self.needs_redraw = true;
            }
            auto_zoom_finished = zoom.is_finished();
        }

        if auto_zoom_finished {
            info!("auto zoom finished at width {:e}", self.config.viewport.width());
            self.auto_zoom = None;
        }

        if !self.needs_redraw {
            return Ok(false);
        }

        self.present_frame()?;
        Ok(true)
    }

    /// Renders the current snapshot and hands it to the sink.
    pub fn present_frame(&mut self) -> Result<(), SessionError> {
        let (algorithm, colour_map) = self.config.build_render_request()?;
        let grid = render_frame(
            &self.config.viewport,
            self.size,
            &algorithm,
            &colour_map,
            self.strategy,
        );

        self.sink.present(&grid, self.frames_presented)?;
        self.frames_presented += 1;
        self.needs_redraw = false;

        Ok(())
    }
}

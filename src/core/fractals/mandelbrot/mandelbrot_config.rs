use crate::core::{
    data::viewport::Viewport,
    fractals::mandelbrot::{
        algorithm::MandelbrotAlgorithm,
        colour_mapping::{
            factory::mandelbrot_colour_map_factory, kinds::MandelbrotColourMapKinds,
            map::MandelbrotColourMap,
        },
        errors::MandelbrotError,
    },
};

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const ITERATION_STEP: u32 = 50;
pub const MIN_BLURRED_ITERATIONS: u32 = 100;

/// Host-owned render settings: where to look, how hard to iterate and how to colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub viewport: Viewport,
    pub max_iterations: u32,
    pub colour_map_kind: MandelbrotColourMapKinds,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_map_kind: MandelbrotColourMapKinds::default(),
        }
    }
}

impl MandelbrotConfig {
    pub fn validate(&self) -> Result<(), MandelbrotError> {
        if self.max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(())
    }

    pub(crate) fn build_render_request(
        &self,
    ) -> Result<(MandelbrotAlgorithm, Box<dyn MandelbrotColourMap>), MandelbrotError> {
        let algorithm = MandelbrotAlgorithm::new(self.max_iterations)?;
        let colour_map = mandelbrot_colour_map_factory(self.colour_map_kind, self.max_iterations);

        Ok((algorithm, colour_map))
    }

    pub fn sharpen(&mut self) {
        self.max_iterations = self.max_iterations.saturating_add(ITERATION_STEP);
    }

    /// Lowers the budget by one step without dropping below the blur floor.
    /// A budget already under the floor is left alone.
    pub fn blur(&mut self) {
        let floor = MIN_BLURRED_ITERATIONS.min(self.max_iterations);
        self.max_iterations = self
            .max_iterations
            .saturating_sub(ITERATION_STEP)
            .max(floor);
    }

    pub fn reset_view(&mut self) {
        self.viewport = Viewport::default();
        self.max_iterations = DEFAULT_MAX_ITERATIONS;
    }
}

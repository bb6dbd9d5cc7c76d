use std::time::Duration;
use crate::controllers::interactive::errors::config::ConfigError;
use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.5;
pub const DEFAULT_INITIAL_SCALE: f64 = 1.5;
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_secs(3);

/// Process-wide settings. Everything here except `animation_duration` is fixed
/// once a controller is built; the duration is only the starting value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub resolution: Resolution,
    pub max_iterations: u32,
    pub zoom_factor: f64,
    pub initial_center: Complex,
    pub initial_scale: f64,
    pub animation_duration: Duration,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
                .expect("default resolution is valid"),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            initial_center: Complex::ZERO,
            initial_scale: DEFAULT_INITIAL_SCALE,
            animation_duration: DEFAULT_ANIMATION_DURATION,
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        if !(self.zoom_factor.is_finite() && self.zoom_factor > 1.0) {
            return Err(ConfigError::InvalidZoomFactor {
                zoom_factor: self.zoom_factor,
            });
        }

        if !(self.initial_scale.is_finite() && self.initial_scale > 0.0) {
            return Err(ConfigError::InvalidInitialScale {
                scale: self.initial_scale,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn initial_viewport(&self) -> Viewport {
        Viewport::new(self.initial_center, self.initial_scale)
    }
}

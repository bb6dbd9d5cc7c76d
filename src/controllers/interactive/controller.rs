use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use crate::controllers::interactive::animation::animator::{ProgressiveAnimator, TickHandle, TickOutcome};
use crate::controllers::interactive::animation::run::RunState;
use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::errors::config::ConfigError;
use crate::controllers::interactive::events::intent::Intent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::render_frame::RenderFrameError;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_delta_to_complex_delta;

/// Negative and NaN durations mean "render at full detail immediately".
fn duration_from_seconds(seconds: f64) -> Duration {
    if seconds.is_nan() || seconds <= 0.0 {
        return Duration::ZERO;
    }

    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
}

/// Owns the viewport and the animation. Every view change starts a new
/// progressive run, superseding whatever was in flight.
pub struct ExplorerController {
    config: ExplorerConfig,
    viewport: Viewport,
    animation_duration: Duration,
    drag_origin: Option<(f64, f64)>,
    initial_render_requested: bool,
    animator: ProgressiveAnimator,
}

impl ExplorerController {
    pub fn new(
        config: ExplorerConfig,
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            viewport: config.initial_viewport(),
            animation_duration: config.animation_duration,
            drag_origin: None,
            initial_render_requested: false,
            animator: ProgressiveAnimator::new(
                config.resolution,
                config.max_iterations,
                presenter_port,
            ),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    #[must_use]
    pub fn run_status(&self, handle: TickHandle) -> Option<RunState> {
        self.animator.status(handle)
    }

    /// Dispatches one intent. Returns the first tick of the run it started, if any.
    pub fn handle(&mut self, intent: Intent, now: Instant) -> Option<TickHandle> {
        match intent {
            Intent::ZoomIn => Some(self.zoom_in(now)),
            Intent::ZoomOut => Some(self.zoom_out(now)),
            Intent::Reset => Some(self.reset(now)),
            Intent::PanStart { x, y } => {
                self.pan_start(x, y);
                None
            }
            Intent::PanMove { x, y } => self.pan_move(x, y, now),
            Intent::PanEnd => {
                self.pan_end();
                None
            }
            Intent::SetAnimationDuration { seconds } => {
                self.set_animation_duration(seconds);
                None
            }
            Intent::RequestRender => Some(self.request_render(now)),
            Intent::RequestInitialRender => self.request_initial_render(now),
        }
    }

    pub fn zoom_in(&mut self, now: Instant) -> TickHandle {
        self.viewport.zoom_by(self.config.zoom_factor);
        self.request_render(now)
    }

    pub fn zoom_out(&mut self, now: Instant) -> TickHandle {
        self.viewport.zoom_by(1.0 / self.config.zoom_factor);
        self.request_render(now)
    }

    pub fn reset(&mut self, now: Instant) -> TickHandle {
        self.viewport = self.config.initial_viewport();
        self.request_render(now)
    }

    /// Drags the image by a pointer movement in canvas pixels.
    pub fn pan_by(&mut self, dpx: f64, dpy: f64, now: Instant) -> TickHandle {
        let delta: Complex =
            pixel_delta_to_complex_delta(dpx, dpy, &self.viewport, self.config.resolution);
        self.viewport.pan_by(delta);
        self.request_render(now)
    }

    pub fn pan_start(&mut self, x: f64, y: f64) {
        self.drag_origin = Some((x, y));
    }

    /// Pans by the movement since the previous pointer event. Ignored unless a drag is active.
    pub fn pan_move(&mut self, x: f64, y: f64, now: Instant) -> Option<TickHandle> {
        let (last_x, last_y) = self.drag_origin?;
        self.drag_origin = Some((x, y));

        Some(self.pan_by(x - last_x, y - last_y, now))
    }

    pub fn pan_end(&mut self) {
        self.drag_origin = None;
    }

    pub fn set_animation_duration(&mut self, seconds: f64) {
        self.animation_duration = duration_from_seconds(seconds);
        debug!(duration_ms = self.animation_duration.as_millis() as u64, "animation duration changed");
    }

    pub fn request_render(&mut self, now: Instant) -> TickHandle {
        self.animator.begin(self.viewport, self.animation_duration, now)
    }

    /// Starts the very first run. Later calls are ignored.
    pub fn request_initial_render(&mut self, now: Instant) -> Option<TickHandle> {
        if self.initial_render_requested {
            warn!("initial render already requested");
            return None;
        }

        self.initial_render_requested = true;
        Some(self.request_render(now))
    }

    pub fn tick(&mut self, handle: TickHandle, now: Instant) -> Result<TickOutcome, RenderFrameError> {
        self.animator.tick(handle, now)
    }
}

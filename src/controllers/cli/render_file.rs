use std::error::Error;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::controllers::interactive::{
    ConfigError, ExplorerConfig, ExplorerController, FrameData, Intent,
    InteractiveControllerPresenterPort, RenderEvent, TickOutcome,
};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::RenderFrameError;

/// Upper bound on simulated ticks for one headless animation.
pub const MAX_TICKS: u64 = 10_000;

/// What a headless run should do before rendering, and how fast the
/// simulated display refreshes.
#[derive(Debug, Clone, PartialEq)]
pub struct CliRenderPlan {
    pub intents: Vec<Intent>,
    pub frame_interval: Duration,
}

impl CliRenderPlan {
    /// Zooms in `zoom_steps` times, then drags the image by `pan` canvas pixels.
    pub fn new(zoom_steps: u32, pan: (f64, f64), animation_seconds: f64, frame_interval: Duration) -> Self {
        let mut intents = vec![Intent::SetAnimationDuration {
            seconds: animation_seconds,
        }];
        intents.extend((0..zoom_steps).map(|_| Intent::ZoomIn));

        if pan != (0.0, 0.0) {
            intents.push(Intent::PanStart { x: 0.0, y: 0.0 });
            intents.push(Intent::PanMove { x: pan.0, y: pan.1 });
            intents.push(Intent::PanEnd);
        }

        Self {
            intents,
            frame_interval,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CliRenderSummary {
    pub ticks: u32,
    pub final_cap: u32,
    pub total_render_time: Duration,
}

#[derive(Debug, PartialEq)]
pub enum CliRenderError {
    Config(ConfigError),
    Render(RenderFrameError),
    ZeroFrameInterval,
    TooManyTicks { required: u64 },
    NoFrame,
}

impl fmt::Display for CliRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {}", err),
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::ZeroFrameInterval => write!(f, "frame interval must be greater than zero"),
            Self::TooManyTicks { required } => write!(
                f,
                "animation needs {} ticks at this frame interval, limit is {}",
                required, MAX_TICKS
            ),
            Self::NoFrame => write!(f, "no frame was rendered"),
        }
    }
}

impl Error for CliRenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::ZeroFrameInterval | Self::TooManyTicks { .. } | Self::NoFrame => None,
        }
    }
}

impl From<ConfigError> for CliRenderError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<RenderFrameError> for CliRenderError {
    fn from(err: RenderFrameError) -> Self {
        Self::Render(err)
    }
}

/// Ticks at `0, interval, 2·interval, ...` until the duration has elapsed.
fn required_ticks(duration: Duration, frame_interval: Duration) -> u64 {
    let steps = (duration.as_secs_f64() / frame_interval.as_secs_f64()).ceil();

    if steps >= MAX_TICKS as f64 {
        return u64::MAX;
    }

    steps as u64 + 1
}

/// Keeps only the newest frame. Progress is not shown headless.
#[derive(Default)]
struct LatestFramePort {
    frame: Mutex<Option<FrameData>>,
}

impl LatestFramePort {
    fn take(&self) -> Option<FrameData> {
        self.frame.lock().ok().and_then(|mut guard| guard.take())
    }
}

impl InteractiveControllerPresenterPort for LatestFramePort {
    fn present(&self, event: RenderEvent) {
        if let RenderEvent::Frame(frame) = event
            && let Ok(mut guard) = self.frame.lock()
        {
            *guard = Some(frame);
        }
    }
}

/// Runs one full animation without a display, ticking on a simulated clock,
/// and hands the final frame to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    config: ExplorerConfig,
    frame: Option<FrameData>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, config: ExplorerConfig) -> Self {
        Self {
            presenter,
            config,
            frame: None,
        }
    }

    pub fn generate(&mut self, plan: &CliRenderPlan) -> Result<CliRenderSummary, CliRenderError> {
        if plan.frame_interval.is_zero() {
            return Err(CliRenderError::ZeroFrameInterval);
        }

        let latest = Arc::new(LatestFramePort::default());
        let mut controller = ExplorerController::new(
            self.config,
            Arc::clone(&latest) as Arc<dyn InteractiveControllerPresenterPort>,
        )?;

        let mut now = Instant::now();
        for intent in &plan.intents {
            controller.handle(*intent, now);
        }
        let required = required_ticks(controller.animation_duration(), plan.frame_interval);
        if required > MAX_TICKS {
            return Err(CliRenderError::TooManyTicks { required });
        }

        // runs started by the intents are superseded here
        let mut handle = controller
            .request_initial_render(now)
            .ok_or(CliRenderError::NoFrame)?;

        info!(
            width = self.config.resolution.width(),
            height = self.config.resolution.height(),
            max_iterations = self.config.max_iterations,
            center = ?controller.viewport().center(),
            scale = controller.viewport().scale(),
            "rendering mandelbrot set"
        );

        let mut ticks = 0;
        let mut total_render_time = Duration::ZERO;
        loop {
            let outcome = controller.tick(handle, now).inspect_err(|err| {
                error!(%err, "frame render failed");
            })?;
            ticks += 1;

            if let Some(frame) = latest.take() {
                total_render_time += frame.render_duration;
                self.frame = Some(frame);
            }

            match outcome {
                TickOutcome::Continue(next) => handle = next,
                TickOutcome::Completed => break,
                TickOutcome::Stale => return Err(CliRenderError::NoFrame),
            }

            now += plan.frame_interval;
        }

        let final_cap = self
            .frame
            .as_ref()
            .map(|frame| frame.iteration_cap)
            .ok_or(CliRenderError::NoFrame)?;

        info!(ticks, final_cap, ?total_render_time, "animation complete");

        Ok(CliRenderSummary {
            ticks,
            final_cap,
            total_render_time,
        })
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(frame) = &self.frame {
            self.presenter.present(&frame.pixel_buffer, filepath)?
        }

        Ok(())
    }

    #[must_use]
    pub fn frame(&self) -> Option<&FrameData> {
        self.frame.as_ref()
    }
}

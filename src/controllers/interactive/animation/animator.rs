use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};
use crate::controllers::interactive::animation::run::{AnimationRun, RunState, progress_percent};
use crate::controllers::interactive::data::frame_data::{FrameData, ProgressReport};
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::render_frame::{RenderFrameError, render_frame_into};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;

/// A scheduled tick of one animation run. Handles of superseded runs stay
/// valid values but ticking them does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    generation: u64,
}

impl TickHandle {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The handle belongs to a superseded or finished run; nothing was rendered.
    Stale,
    /// A frame was presented; schedule this handle again on the next opportunity.
    Continue(TickHandle),
    /// The final frame at full detail was presented.
    Completed,
}

/// Re-renders the frame at increasing iteration caps over a fixed duration.
///
/// Single-threaded: the host calls [`ProgressiveAnimator::tick`] once per
/// scheduling opportunity (e.g. per display refresh). Beginning a new run is
/// the only way to cancel the current one.
pub struct ProgressiveAnimator {
    max_iterations: u32,
    generation: u64,
    current: Option<AnimationRun>,
    completed_generations: Vec<u64>,
    target: PixelBuffer,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

impl ProgressiveAnimator {
    pub fn new(
        resolution: Resolution,
        max_iterations: u32,
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    ) -> Self {
        Self {
            max_iterations,
            generation: 0,
            current: None,
            completed_generations: Vec::new(),
            target: PixelBuffer::new(resolution),
            presenter_port,
        }
    }

    pub fn begin(&mut self, viewport: Viewport, duration: Duration, now: Instant) -> TickHandle {
        if let Some(previous) = self.current.as_mut().filter(|run| run.is_running()) {
            previous.supersede();
            debug!(generation = previous.generation(), "animation run superseded");
        }

        self.generation += 1;
        let generation = self.generation;

        self.current = Some(AnimationRun::new(
            generation,
            viewport,
            now,
            duration,
            self.max_iterations,
        ));

        debug!(
            generation,
            duration_ms = duration.as_millis() as u64,
            scale = viewport.scale(),
            "animation run started"
        );

        self.presenter_port
            .present(RenderEvent::Progress(ProgressReport { generation, percent: 0 }));

        TickHandle { generation }
    }

    pub fn tick(&mut self, handle: TickHandle, now: Instant) -> Result<TickOutcome, RenderFrameError> {
        let Some(run) = self
            .current
            .as_mut()
            .filter(|run| run.generation() == handle.generation && run.is_running())
        else {
            trace!(generation = handle.generation, "ignoring stale tick");
            return Ok(TickOutcome::Stale);
        };

        let progress = run.progress_at(now);
        let cap = run.cap_for(progress);
        let percent = progress_percent(progress);

        let start = Instant::now();
        render_frame_into(run.viewport(), cap, &mut self.target)?;
        let render_duration = start.elapsed();

        trace!(generation = handle.generation, cap, percent, ?render_duration, "frame rendered");

        self.presenter_port.present(RenderEvent::Progress(ProgressReport {
            generation: handle.generation,
            percent,
        }));
        self.presenter_port.present(RenderEvent::Frame(FrameData {
            generation: handle.generation,
            iteration_cap: cap,
            pixel_buffer: self.target.clone(),
            render_duration,
        }));

        if progress < 1.0 {
            return Ok(TickOutcome::Continue(handle));
        }

        run.complete();
        self.completed_generations.push(handle.generation);
        debug!(generation = handle.generation, "animation run completed");

        Ok(TickOutcome::Completed)
    }

    /// State of the run a handle was issued for, `None` for a handle this
    /// animator never issued. A replaced run keeps the state it ended in.
    #[must_use]
    pub fn status(&self, handle: TickHandle) -> Option<RunState> {
        if handle.generation == 0 || handle.generation > self.generation {
            return None;
        }

        match &self.current {
            Some(run) if run.generation() == handle.generation => Some(run.state()),
            // completed generations are pushed in increasing order
            _ if self.completed_generations.binary_search(&handle.generation).is_ok() => {
                Some(RunState::Completed)
            }
            _ => Some(RunState::Superseded),
        }
    }

    /// State of the current run, `None` while idle (no run started yet).
    #[must_use]
    pub fn state(&self) -> Option<RunState> {
        self.current.as_ref().map(AnimationRun::state)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state() == Some(RunState::Running)
    }
}

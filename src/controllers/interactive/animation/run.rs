use std::time::{Duration, Instant};
use crate::core::data::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Completed,
    Superseded,
}

/// One in-flight progressive render. The viewport and duration are captured
/// when the run starts and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRun {
    generation: u64,
    viewport: Viewport,
    start_time: Instant,
    duration: Duration,
    target_cap: u32,
    state: RunState,
}

impl AnimationRun {
    #[must_use]
    pub fn new(
        generation: u64,
        viewport: Viewport,
        start_time: Instant,
        duration: Duration,
        target_cap: u32,
    ) -> Self {
        Self {
            generation,
            viewport,
            start_time,
            duration,
            target_cap,
            state: RunState::Running,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Fraction of the run elapsed at `now`, clamped to `[0, 1]`. A zero
    /// duration is complete immediately.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(self.start_time);

        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Iteration cap for a given progress: `floor(progress * target)`, at least 1.
    #[must_use]
    pub fn cap_for(&self, progress: f64) -> u32 {
        let cap = (progress * f64::from(self.target_cap)).floor() as u32;

        cap.clamp(1, self.target_cap.max(1))
    }

    pub(crate) fn complete(&mut self) {
        self.state = RunState::Completed;
    }

    pub(crate) fn supersede(&mut self) {
        self.state = RunState::Superseded;
    }
}

/// Whole percent for the progress display. Reaches exactly 100 only once the
/// run is complete.
#[must_use]
pub fn progress_percent(progress: f64) -> u8 {
    if progress >= 1.0 {
        return 100;
    }

    (progress * 100.0).floor().clamp(0.0, 99.0) as u8
}

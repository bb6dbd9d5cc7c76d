use std::time::Duration;
use crate::core::data::pixel_buffer::PixelBuffer;

/// One rendered detail level of an animation run.
#[derive(Debug, Clone)]
pub struct FrameData {
    pub generation: u64,
    pub iteration_cap: u32,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}

/// Progress of an animation run in whole percent, 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressReport {
    pub generation: u64,
    pub percent: u8,
}

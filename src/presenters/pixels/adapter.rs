use std::sync::Mutex;
use crate::controllers::interactive::{FrameData, InteractiveControllerPresenterPort, RenderEvent};

/// Controller-facing half of the pixels presenter. Keeps only the newest
/// frame and progress value; the window picks them up on the next redraw.
#[derive(Default)]
pub struct PixelsAdapter {
    latest_frame: Mutex<Option<FrameData>>,
    progress: Mutex<u8>,
}

impl InteractiveControllerPresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        match event {
            RenderEvent::Frame(frame) => {
                if let Ok(mut guard) = self.latest_frame.lock() {
                    *guard = Some(frame);
                }
            }
            RenderEvent::Progress(report) => {
                if let Ok(mut guard) = self.progress.lock() {
                    *guard = report.percent;
                }
            }
        }
    }
}

impl PixelsAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_frame(&self) -> Option<FrameData> {
        self.latest_frame.lock().ok().and_then(|mut guard| guard.take())
    }

    pub fn progress(&self) -> u8 {
        self.progress.lock().map(|guard| *guard).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::ProgressReport;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::resolution::Resolution;
    use std::time::Duration;

    fn frame(generation: u64) -> FrameData {
        FrameData {
            generation,
            iteration_cap: 1,
            pixel_buffer: PixelBuffer::new(Resolution::new(1, 1).unwrap()),
            render_duration: Duration::ZERO,
        }
    }

    #[test]
    fn test_keeps_only_newest_frame() {
        let adapter = PixelsAdapter::new();

        adapter.present(RenderEvent::Frame(frame(1)));
        adapter.present(RenderEvent::Frame(frame(2)));

        assert_eq!(adapter.take_frame().map(|frame| frame.generation), Some(2));
        assert!(adapter.take_frame().is_none());
    }

    #[test]
    fn test_tracks_latest_progress() {
        let adapter = PixelsAdapter::new();
        assert_eq!(adapter.progress(), 0);

        adapter.present(RenderEvent::Progress(ProgressReport { generation: 1, percent: 37 }));

        assert_eq!(adapter.progress(), 37);
    }
}

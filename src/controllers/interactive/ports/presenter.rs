use crate::controllers::interactive::events::render_event::RenderEvent;

/// Output side of the animation: receives progress reports and rendered frames.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}

use std::marker::PhantomData;

use winit::{dpi::LogicalSize, event_loop::EventLoop, window::{Window, WindowBuilder}};
use crate::controllers::interactive::{ExplorerConfig, ExplorerController};
use crate::input::gui::app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort};
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ExplorerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            config: ExplorerConfig::default(),
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");
        let resolution = self.config.resolution;

        // the canvas has a fixed resolution, so the window does too
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Fractal Ramp")
                .with_inner_size(LogicalSize::new(resolution.width(), resolution.height()))
                .with_resizable(false)
                .build(&event_loop)
                .expect("Failed to create window"),
        ));

        let presenter: P = self.presenter_factory.build(window, resolution);
        let controller = ExplorerController::new(self.config, presenter.share_adapter())
            .expect("default explorer config is valid");
        let app = GuiApp::new(window, &event_loop, presenter, controller);

        app.run(event_loop);
    }
}

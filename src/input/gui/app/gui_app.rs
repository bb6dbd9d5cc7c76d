use std::time::Instant;
use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{error, info};
use winit::{
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};
use crate::controllers::interactive::{ExplorerController, Intent, TickHandle, TickOutcome};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

const MAX_ANIMATION_SECONDS: f32 = 10.0;

/// Every change updates the duration. A render is requested once the value
/// settles: on drag release, or right away for a click on the track.
fn duration_slider_intents(seconds: f32, changed: bool, dragged: bool, drag_released: bool) -> Vec<Intent> {
    let mut intents = Vec::new();

    if changed {
        intents.push(Intent::SetAnimationDuration {
            seconds: f64::from(seconds),
        });
    }
    if drag_released || (changed && !dragged) {
        intents.push(Intent::RequestRender);
    }

    intents
}

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    controller: ExplorerController,
    pending_tick: Option<TickHandle>,
    cursor: (f64, f64),
    animation_seconds: f32,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: ExplorerController,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );
        let animation_seconds = controller.animation_duration().as_secs_f32();

        Self {
            window,
            presenter,
            controller,
            pending_tick: None,
            cursor: (0.0, 0.0),
            animation_seconds,
            egui_ctx,
            egui_state,
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        if let Some(handle) = self.controller.handle(intent, Instant::now()) {
            self.pending_tick = Some(handle);
        }
    }

    fn tick(&mut self) {
        let Some(handle) = self.pending_tick.take() else {
            return;
        };

        match self.controller.tick(handle, Instant::now()) {
            Ok(TickOutcome::Continue(next)) => self.pending_tick = Some(next),
            Ok(TickOutcome::Completed | TickOutcome::Stale) => {}
            Err(err) => error!(%err, "frame render failed"),
        }
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let progress = self.presenter.progress();
        let animation_seconds = &mut self.animation_seconds;
        let mut intents = Vec::new();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Controls")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("Zoom In").clicked() {
                            intents.push(Intent::ZoomIn);
                        }
                        if ui.button("Zoom Out").clicked() {
                            intents.push(Intent::ZoomOut);
                        }
                        if ui.button("Reset").clicked() {
                            intents.push(Intent::Reset);
                        }
                    });

                    let slider = ui.add(
                        egui::Slider::new(animation_seconds, 0.0..=MAX_ANIMATION_SECONDS)
                            .text("Animation (s)"),
                    );
                    intents.extend(duration_slider_intents(
                        *animation_seconds,
                        slider.changed(),
                        slider.dragged(),
                        slider.drag_released(),
                    ));

                    ui.add(
                        egui::ProgressBar::new(f32::from(progress) / 100.0)
                            .text(format!("{progress}%")),
                    );
                });
        });

        for intent in intents {
            self.dispatch(intent);
        }

        output
    }

    fn redraw(&mut self) -> Result<(), pixels::Error> {
        self.tick();

        let mut egui_output = self.update_ui();
        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state.handle_platform_output(self.window, platform_output);

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn handle_pointer(&mut self, event: &WindowEvent, egui_consumed: bool) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self
                    .presenter
                    .window_pos_to_canvas((position.x as f32, position.y as f32));
                let (x, y) = self.cursor;
                self.dispatch(Intent::PanMove { x, y });
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } if !egui_consumed => {
                let (x, y) = self.cursor;
                self.dispatch(Intent::PanStart { x, y });
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            }
            | WindowEvent::CursorLeft { .. } => self.dispatch(Intent::PanEnd),
            _ => {}
        }
    }

    pub fn run(mut self, event_loop: EventLoop<()>) {
        let window = self.window;
        let mut redraw_pending = true;

        self.dispatch(Intent::RequestInitialRender);
        info!("explorer window opened");

        event_loop
            .run(move |event, elwt| match event {
                Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                    let response = self.egui_state.on_window_event(window, event);
                    if response.repaint {
                        redraw_pending = true;
                    }

                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::RedrawRequested => {
                            redraw_pending = false;

                            if let Err(err) = self.redraw() {
                                error!(%err, "surface render failed");
                                elwt.exit();
                            }
                        }
                        WindowEvent::Resized(size) => {
                            if let Err(err) = self.presenter.resize_surface(size.width, size.height) {
                                error!(%err, "surface resize failed");
                                elwt.exit();
                            }
                            redraw_pending = true;
                        }
                        _ => self.handle_pointer(event, response.consumed),
                    }
                }
                Event::AboutToWait => {
                    if redraw_pending || self.pending_tick.is_some() {
                        window.request_redraw();
                    }
                }
                _ => {}
            })
            .expect("Event loop error");
    }
}

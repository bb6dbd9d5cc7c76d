use std::sync::Arc;

use egui::Context as EguiContext;
use winit::window::Window;

use crate::controllers::interactive::InteractiveControllerPresenterPort;
use crate::core::data::resolution::Resolution;

pub trait GuiPresenterPort {
    fn new(window: &'static Window, resolution: Resolution) -> Self;
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;
    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
    /// Maps a physical window position to canvas pixels, clamped to the canvas.
    fn window_pos_to_canvas(&self, position: (f32, f32)) -> (f64, f64);
    fn progress(&self) -> u8;
}

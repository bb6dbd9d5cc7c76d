use winit::window::Window;

use crate::core::data::resolution::Resolution;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window, resolution: Resolution) -> T;
}

#[cfg(feature = "gui")]
mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::cli::render_file::{CliRenderController, CliRenderError, CliRenderPlan, CliRenderSummary};
pub use controllers::interactive::{
    ConfigError, ExplorerConfig, ExplorerController, FrameData, Intent,
    InteractiveControllerPresenterPort, ProgressReport, RenderEvent, RunState, TickHandle, TickOutcome,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::render_frame::{RenderFrameError, render_frame};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::resolution::Resolution;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::algorithm::escape_iterations;
pub use crate::core::fractals::mandelbrot::colour_map::colour_for;
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;

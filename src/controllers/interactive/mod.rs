//! Interactive exploration of the Mandelbrot set.
//!
//! [`ExplorerController`] owns the viewport and turns user [`Intent`]s into
//! progressive animation runs. Each run re-renders the whole frame at an
//! iteration cap that grows with elapsed time, and every frame is pushed to
//! an [`InteractiveControllerPresenterPort`].
//!
//! The controller never schedules anything itself. Hosts call
//! [`ExplorerController::tick`] with the [`TickHandle`] they were given,
//! once per display refresh or timer firing, until the run completes or a
//! newer run makes the handle stale.

pub mod animation;
mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use animation::animator::{TickHandle, TickOutcome};
pub use animation::run::RunState;
pub use controller::ExplorerController;
pub use data::explorer_config::ExplorerConfig;
pub use data::frame_data::{FrameData, ProgressReport};
pub use errors::config::ConfigError;
pub use events::intent::Intent;
pub use events::render_event::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;

//! Port definitions for the interactive controller.
//!
//! Trait definitions for the boundary between the controller and the
//! presentation layer.

pub mod presenter;

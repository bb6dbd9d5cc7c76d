//! Windowed explorer: winit for the window and input, `pixels` for the
//! fractal framebuffer, egui for the controls.

pub mod app;
pub mod commands;

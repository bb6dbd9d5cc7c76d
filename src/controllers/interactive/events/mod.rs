pub mod intent;
pub mod render_event;

mod app_events;
mod app_render;
mod app_state;
mod mouse_events;
mod mouse_hover;
mod status_line_render;


// Re-export public types
pub use app_state::{App, STATUS_LINE_HEIGHT};

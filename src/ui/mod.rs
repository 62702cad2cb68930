//! UI-Layer: egui-Eingaben → `AppIntent`s, Bedienpanel.

mod input;
mod panel;

pub use input::collect_canvas_events;
pub use panel::{render_control_panel, SLIDER_MAX};

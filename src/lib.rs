//! Neo Spline Editor Library.
//! Kurvenmodell, Controller und egui-Anbindung als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppIntent, EditorController, EditorState};
pub use crate::core::{ControlPoint, ControlPointId, CurveConfig, CurveModel, InterpolationMode};
pub use shared::{CurveColors, EditorOptions, RenderScene};

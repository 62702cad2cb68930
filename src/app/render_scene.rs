//! Builder für Render-Szenen aus dem EditorState.

use crate::app::EditorState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen EditorState.
pub fn build(state: &EditorState) -> RenderScene {
    let model = state.model();
    let config = model.config();

    RenderScene {
        canvas_size: [config.width, config.height],
        control_points: model.control_points().to_vec(),
        curve: model.sample(state.interpolation),
        interpolation: state.interpolation,
        marker: state.marker_point(),
        colors: state.options.colors,
        handle_radius: state.options.handle_radius,
        curve_line_width: state.options.curve_line_width,
        control_line_width: state.options.control_line_width,
    }
}

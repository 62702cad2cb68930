//! Handler für Darstellung: Marker, Interpolationsmodus, Farben.

use crate::app::EditorState;
use crate::core::InterpolationMode;
use crate::shared::CurveColors;

/// Setzt die Marker-Position. Die Abbildung auf einen Punkt erfolgt erst beim Rendern.
pub fn set_marker_position(state: &mut EditorState, position: f32) {
    state.marker_position = Some(position);
    state.request_redraw();
}

/// Wechselt den Interpolationsmodus. Die Kontrollpunkte bleiben unverändert.
pub fn set_interpolation_mode(state: &mut EditorState, mode: InterpolationMode) {
    if state.interpolation != mode {
        log::info!("Interpolation: {}", mode.label());
    }
    state.interpolation = mode;
    state.request_redraw();
}

/// Ersetzt die Farbpalette.
pub fn set_colors(state: &mut EditorState, colors: CurveColors) {
    state.options.colors = colors;
    state.request_redraw();
}

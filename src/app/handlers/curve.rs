//! Handler für Kontrollpunkt-Operationen (Drag, Einfügen, Entfernen).

use crate::app::EditorState;
use crate::core::ControlPointId;
use glam::Vec2;

/// Idle → Dragging(id). Unbekannte IDs lassen den Zustand Idle.
pub fn begin_drag(state: &mut EditorState, id: ControlPointId) {
    if state.model().point(id).is_none() {
        return;
    }
    log::debug!("Drag gestartet auf Kontrollpunkt {}", id);
    state.dragging = Some(id);
}

/// Verschiebt den gegriffenen Punkt. Bereits entfernte Punkte: No-op.
pub fn move_point(state: &mut EditorState, id: ControlPointId, pos: Vec2) {
    if state.model_mut().move_point(id, pos.x, pos.y) {
        state.request_redraw();
    }
}

/// Dragging → Idle.
pub fn end_drag(state: &mut EditorState) {
    if let Some(id) = state.dragging.take() {
        log::debug!("Drag beendet auf Kontrollpunkt {}", id);
    }
}

/// Fügt einen freien Kontrollpunkt ein.
pub fn add_point(state: &mut EditorState, pos: Vec2) {
    state.model_mut().add_point(pos.x, pos.y);
    state.request_redraw();
}

/// Entfernt einen freien Kontrollpunkt. Feste oder unbekannte Punkte: No-op.
pub fn remove_point(state: &mut EditorState, id: ControlPointId) {
    if state.model_mut().remove_point(id) {
        if state.dragging == Some(id) {
            state.dragging = None;
        }
        state.request_redraw();
    }
}

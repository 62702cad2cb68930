mod dragging;
mod editing;
mod view;

use neo_spline_editor::{AppIntent, EditorController, EditorOptions, EditorState};

/// Editor mit 320×200-Canvas und Standardwerten.
pub(crate) fn make_editor() -> (EditorController, EditorState) {
    (EditorController::new(), EditorState::new(EditorOptions::default()))
}

/// Schickt mehrere Intents nacheinander durch den Controller.
pub(crate) fn send_all(
    controller: &mut EditorController,
    state: &mut EditorState,
    intents: impl IntoIterator<Item = AppIntent>,
) {
    for intent in intents {
        controller.handle_intent(state, intent);
    }
}

//! Editor-Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, EditorState};
use crate::shared::RenderScene;

/// Orchestriert Gesten-Intents und Commands auf den `EditorState`.
///
/// Zustandslos: der Drag-Zustand liegt in `EditorState::dragging`.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut EditorState, intent: AppIntent) {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command);
        }
    }

    fn map_intent_to_commands(&self, state: &EditorState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(&mut self, state: &mut EditorState, command: AppCommand) {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Kontrollpunkte ===
            AppCommand::BeginDrag { id } => handlers::curve::begin_drag(state, id),
            AppCommand::MoveControlPoint { id, pos } => {
                handlers::curve::move_point(state, id, pos)
            }
            AppCommand::EndDrag => handlers::curve::end_drag(state),
            AppCommand::AddControlPoint { pos } => handlers::curve::add_point(state, pos),
            AppCommand::RemoveControlPoint { id } => handlers::curve::remove_point(state, id),

            // === Darstellung ===
            AppCommand::SetMarkerPosition { position } => {
                handlers::view::set_marker_position(state, position)
            }
            AppCommand::SetInterpolationMode { mode } => {
                handlers::view::set_interpolation_mode(state, mode)
            }
            AppCommand::SetColors { colors } => handlers::view::set_colors(state, colors),
        }
    }

    /// Baut die RenderScene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &EditorState) -> RenderScene {
        render_scene::build(state)
    }
}

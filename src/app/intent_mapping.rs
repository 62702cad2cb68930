//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier sitzt die Gesten-Zustandsmaschine (Idle ↔ Dragging): Hit-Tests
//! gegen das Modell entscheiden, welche Commands ein Intent auslöst.

use super::{AppCommand, AppIntent, EditorState};
use crate::core::ControlPoint;
use glam::Vec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &EditorState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => match hit_test(state, pos) {
            Some(point) => vec![AppCommand::BeginDrag { id: point.id }],
            None => vec![],
        },
        AppIntent::PointerMoved { pos } => match state.dragging {
            Some(id) => vec![AppCommand::MoveControlPoint { id, pos }],
            None => vec![],
        },
        AppIntent::PointerReleased => {
            if state.is_dragging() {
                vec![AppCommand::EndDrag]
            } else {
                vec![]
            }
        }
        AppIntent::DoubleClicked { pos } => {
            // Doppelklick bricht einen laufenden Drag immer ab
            let mut commands = Vec::with_capacity(2);
            if state.is_dragging() {
                commands.push(AppCommand::EndDrag);
            }
            match hit_test(state, pos) {
                Some(point) if !point.fixed => {
                    commands.push(AppCommand::RemoveControlPoint { id: point.id });
                }
                Some(_) => {}
                None => commands.push(AppCommand::AddControlPoint { pos }),
            }
            commands
        }
        AppIntent::MarkerPositionChanged { position } => {
            vec![AppCommand::SetMarkerPosition { position }]
        }
        AppIntent::MarkerSliderChanged { value, max } => {
            if max > 0.0 {
                vec![AppCommand::SetMarkerPosition {
                    position: value / max,
                }]
            } else {
                vec![]
            }
        }
        AppIntent::InterpolationModeChanged { mode } => {
            vec![AppCommand::SetInterpolationMode { mode }]
        }
        AppIntent::InterpolationToggled => vec![AppCommand::SetInterpolationMode {
            mode: state.interpolation.toggled(),
        }],
        AppIntent::ColorsChanged { colors } => vec![AppCommand::SetColors { colors }],
    }
}

/// Erster Kontrollpunkt innerhalb des Pick-Radius.
fn hit_test(state: &EditorState, pos: Vec2) -> Option<&ControlPoint> {
    let model = state.model();
    model.find_point_near(pos.x, pos.y, model.config().pick_radius)
}

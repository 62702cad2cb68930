//! Application State: zentrale Datenhaltung einer Editor-Instanz.

use super::CommandLog;
use crate::core::{ControlPointId, CurveModel, InterpolationMode};
use crate::shared::EditorOptions;

/// Hauptzustand einer Editor-Instanz.
///
/// Das `CurveModel` ist nur lesend erreichbar; Mutationen laufen über
/// den `EditorController`.
pub struct EditorState {
    model: CurveModel,
    /// Aktiver Interpolationsmodus (Darstellung und Marker-Abbildung)
    pub interpolation: InterpolationMode,
    /// Zuletzt gesetzte Marker-Position (None = kein Marker)
    pub marker_position: Option<f32>,
    /// Gerade gegriffener Kontrollpunkt (None = Idle)
    pub dragging: Option<ControlPointId>,
    /// Laufzeit-Optionen (Farben, Größen, Geometrie)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    redraw_requested: bool,
}

impl EditorState {
    /// Erstellt einen Editor-Zustand aus Optionen.
    ///
    /// Die Kurvengeometrie (Canvas, Mindestabstand, Schrittweite) ist danach fix.
    pub fn new(options: EditorOptions) -> Self {
        let options = options.sanitized();
        Self {
            model: CurveModel::new(options.curve_config()),
            interpolation: options.interpolation,
            marker_position: None,
            dragging: None,
            options,
            command_log: CommandLog::new(),
            // Erster Frame wird immer gezeichnet
            redraw_requested: true,
        }
    }

    /// Read-only Zugriff auf das Kurvenmodell.
    pub fn model(&self) -> &CurveModel {
        &self.model
    }

    pub(crate) fn model_mut(&mut self) -> &mut CurveModel {
        &mut self.model
    }

    /// Gibt zurück, ob gerade ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Markiert den Zustand als neu zu zeichnen.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Gibt zurück, ob ein Redraw ansteht, ohne das Flag zu verändern.
    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// Liest und löscht das Redraw-Flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Marker-Punkt für die aktuelle Marker-Position im aktiven Modus.
    pub fn marker_point(&self) -> Option<glam::Vec2> {
        self.marker_position
            .map(|position| self.model.marker(self.interpolation, position))
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

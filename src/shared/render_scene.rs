//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::CurveColors;
use crate::core::{ControlPoint, InterpolationMode};
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
///
/// Alle Punkte sind Wertkopien; das Modell bleibt alleiniger Besitzer.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Canvas-Größe [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Kontrollpunkte in Sortierreihenfolge
    pub control_points: Vec<ControlPoint>,
    /// Abgetastete Kurve im aktiven Modus
    pub curve: Vec<Vec2>,
    /// Aktiver Interpolationsmodus
    pub interpolation: InterpolationMode,
    /// Marker-Punkt, falls eine Marker-Position gesetzt wurde
    pub marker: Option<Vec2>,
    /// Farbpalette
    pub colors: CurveColors,
    /// Radius der Handles und des Markers
    pub handle_radius: f32,
    /// Linienstärke der Kurve
    pub curve_line_width: f32,
    /// Linienstärke der Kontrollpunkt-Verbindungen
    pub control_line_width: f32,
}

impl RenderScene {
    /// Gibt zurück, ob ein Marker gezeichnet werden soll.
    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }
}

//! Kontrollpunkt der editierbaren Kurve.

use glam::Vec2;

/// Stabile ID eines Kontrollpunkts, vergeben vom `CurveModel`.
///
/// IDs bleiben über Sortierung und Verschiebung hinweg gültig und werden
/// nach dem Entfernen eines Punkts nicht wiederverwendet.
pub type ControlPointId = u64;

/// Ein Kontrollpunkt auf der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Eindeutige ID innerhalb eines Modells
    pub id: ControlPointId,
    /// Position in lokalen Canvas-Koordinaten
    pub position: Vec2,
    /// Endpunkt: x ist unveränderlich, y bleibt verschiebbar
    pub fixed: bool,
}

impl ControlPoint {
    /// Erstellt einen neuen Kontrollpunkt.
    pub fn new(id: ControlPointId, position: Vec2, fixed: bool) -> Self {
        Self {
            id,
            position,
            fixed,
        }
    }

    /// X-Koordinate.
    pub fn x(&self) -> f32 {
        self.position.x
    }

    /// Y-Koordinate.
    pub fn y(&self) -> f32 {
        self.position.y
    }
}

use crate::core::{ControlPointId, InterpolationMode};
use crate::shared::CurveColors;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Drag auf einem Kontrollpunkt beginnen
    BeginDrag { id: ControlPointId },
    /// Gegriffenen Kontrollpunkt verschieben
    MoveControlPoint { id: ControlPointId, pos: glam::Vec2 },
    /// Drag beenden (zurück in den Idle-Zustand)
    EndDrag,
    /// Neuen freien Kontrollpunkt einfügen
    AddControlPoint { pos: glam::Vec2 },
    /// Freien Kontrollpunkt entfernen
    RemoveControlPoint { id: ControlPointId },
    /// Marker-Position setzen
    SetMarkerPosition { position: f32 },
    /// Interpolationsmodus setzen
    SetInterpolationMode { mode: InterpolationMode },
    /// Farbpalette setzen
    SetColors { colors: CurveColors },
}

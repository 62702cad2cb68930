use crate::core::InterpolationMode;
use crate::shared::CurveColors;

/// App-Intents: Eingaben aus UI/Host ohne direkte Mutationslogik.
///
/// Alle Positionen sind lokale Canvas-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primäre Maustaste gedrückt
    PointerPressed { pos: glam::Vec2 },
    /// Zeiger bewegt
    PointerMoved { pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Doppelklick: Punkt entfernen oder neuen Punkt einfügen
    DoubleClicked { pos: glam::Vec2 },
    /// Marker-Position direkt gesetzt (0.0 ..= 1.0)
    MarkerPositionChanged { position: f32 },
    /// Schieberegler bewegt: Position = `value / max`
    MarkerSliderChanged { value: f32, max: f32 },
    /// Interpolationsmodus explizit gewählt
    InterpolationModeChanged { mode: InterpolationMode },
    /// Interpolationsmodus umschalten
    InterpolationToggled,
    /// Farbpalette des Renderers ersetzt
    ColorsChanged { colors: CurveColors },
}

//! Interpolationsmodus der Kurve (Catmull-Rom oder lineare Hüllkurve).

use serde::{Deserialize, Serialize};

/// Wie die Kurve durch die Kontrollpunkte gelegt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMode {
    /// Stückweise lineare Hüllkurve durch alle Kontrollpunkte
    Linear,
    /// Interpolierende Catmull-Rom-Spline
    #[default]
    CatmullRom,
}

impl InterpolationMode {
    /// Anzeigename für UI und Logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::CatmullRom => "Catmull-Rom",
        }
    }

    /// Wechselt zwischen beiden Modi.
    pub fn toggled(self) -> Self {
        match self {
            Self::Linear => Self::CatmullRom,
            Self::CatmullRom => Self::Linear,
        }
    }
}

//! Zentrale Konfiguration für den Kurven-Editor.
//!
//! `EditorOptions` enthält Canvas-Geometrie, Interaktions-Parameter und Farben.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{
    CurveConfig, InterpolationMode, DEFAULT_CATMULL_ROM_STEP, DEFAULT_PICK_RADIUS,
    DEFAULT_PROXIMITY,
};
use serde::{Deserialize, Serialize};

// ── Canvas ──────────────────────────────────────────────────────────

/// Standard-Canvas-Breite in Pixeln.
pub const CANVAS_WIDTH: f32 = 320.0;
/// Standard-Canvas-Höhe in Pixeln.
pub const CANVAS_HEIGHT: f32 = 200.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Radius der Kontrollpunkt-Handles und des Markers.
pub const HANDLE_RADIUS: f32 = 5.0;
/// Linienstärke der Kurve.
pub const CURVE_LINE_WIDTH: f32 = 2.0;
/// Linienstärke der Verbindungslinien zwischen Kontrollpunkten.
pub const CONTROL_LINE_WIDTH: f32 = 1.0;

/// Farbe freier Kontrollpunkte (RGBA: #ff9800).
pub const CONTROL_POINT_COLOR: [f32; 4] = [1.0, 0.596, 0.0, 1.0];
/// Farbe der festen Endpunkte (RGBA: #03a9f4).
pub const FIXED_POINT_COLOR: [f32; 4] = [0.012, 0.663, 0.957, 1.0];
/// Farbe der Kurve (RGBA: #ffffff).
pub const LINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der Kontrollpunkt-Verbindungen (RGBA: #888888).
pub const CONTROL_LINE_COLOR: [f32; 4] = [0.533, 0.533, 0.533, 1.0];
/// Farbe des Markers (RGBA: #00ff00).
pub const MARKER_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Hintergrundfarbe des Canvas (RGBA: #1e1e1e).
pub const BACKGROUND_COLOR: [f32; 4] = [0.118, 0.118, 0.118, 1.0];

/// Dateiname der Optionen-Datei neben der Binary.
const OPTIONS_FILE_NAME: &str = "neo_spline_editor.toml";

/// Farbpalette des Renderers. Zur Laufzeit austauschbar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CurveColors {
    /// Freie Kontrollpunkte
    pub control_point: [f32; 4],
    /// Feste Endpunkte
    pub fixed_point: [f32; 4],
    /// Kurve (linear oder Catmull-Rom)
    pub line: [f32; 4],
    /// Verbindungslinien der Kontrollpunkte
    pub control_line: [f32; 4],
    /// Marker
    pub marker: [f32; 4],
    /// Canvas-Hintergrund
    pub background: [f32; 4],
}

impl Default for CurveColors {
    fn default() -> Self {
        Self {
            control_point: CONTROL_POINT_COLOR,
            fixed_point: FIXED_POINT_COLOR,
            line: LINE_COLOR,
            control_line: CONTROL_LINE_COLOR,
            marker: MARKER_COLOR,
            background: BACKGROUND_COLOR,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle Editor-Optionen.
/// Wird als `neo_spline_editor.toml` neben der Binary gelesen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Canvas-Breite in Pixeln
    pub canvas_width: f32,
    /// Canvas-Höhe in Pixeln
    pub canvas_height: f32,

    // ── Interaktion ─────────────────────────────────────────────
    /// Minimaler horizontaler Abstand benachbarter Kontrollpunkte
    pub proximity: f32,
    /// Trefferradius für Klick/Drag auf Kontrollpunkte
    pub pick_radius: f32,
    /// Schrittweite der Catmull-Rom-Abtastung (0 < step ≤ 1)
    pub catmull_rom_step: f64,
    /// Interpolationsmodus beim Start
    pub interpolation: InterpolationMode,

    // ── Darstellung ─────────────────────────────────────────────
    /// Radius der Handles und des Markers
    pub handle_radius: f32,
    /// Linienstärke der Kurve
    pub curve_line_width: f32,
    /// Linienstärke der Kontrollpunkt-Verbindungen
    pub control_line_width: f32,
    /// Farben
    pub colors: CurveColors,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            proximity: DEFAULT_PROXIMITY,
            pick_radius: DEFAULT_PICK_RADIUS,
            catmull_rom_step: DEFAULT_CATMULL_ROM_STEP,
            interpolation: InterpolationMode::default(),
            handle_radius: HANDLE_RADIUS,
            curve_line_width: CURVE_LINE_WIDTH,
            control_line_width: CONTROL_LINE_WIDTH,
            colors: CurveColors::default(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML. Fehlerhafte Eingaben ergeben Standardwerte.
    pub fn from_toml_str(content: &str) -> Self {
        match toml::from_str::<Self>(content) {
            Ok(opts) => {
                log::info!("Optionen geladen");
                opts.sanitized()
            }
            Err(e) => {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("neo-spline-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Ersetzt ungültige Zahlenwerte durch Standardwerte (mit Warnung).
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        fn positive(value: f32, fallback: f32, name: &str) -> f32 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                log::warn!("Ungültiger Wert für {}: {}, verwende {}", name, value, fallback);
                fallback
            }
        }

        self.canvas_width = positive(self.canvas_width, defaults.canvas_width, "canvas_width");
        self.canvas_height = positive(self.canvas_height, defaults.canvas_height, "canvas_height");
        self.pick_radius = positive(self.pick_radius, defaults.pick_radius, "pick_radius");
        self.handle_radius = positive(self.handle_radius, defaults.handle_radius, "handle_radius");
        self.curve_line_width = positive(
            self.curve_line_width,
            defaults.curve_line_width,
            "curve_line_width",
        );
        self.control_line_width = positive(
            self.control_line_width,
            defaults.control_line_width,
            "control_line_width",
        );

        if !(self.proximity.is_finite() && self.proximity >= 0.0) {
            log::warn!(
                "Ungültiger Wert für proximity: {}, verwende {}",
                self.proximity,
                defaults.proximity
            );
            self.proximity = defaults.proximity;
        }
        if !(self.catmull_rom_step > 0.0 && self.catmull_rom_step <= 1.0) {
            log::warn!(
                "Ungültiger Wert für catmull_rom_step: {}, verwende {}",
                self.catmull_rom_step,
                defaults.catmull_rom_step
            );
            self.catmull_rom_step = defaults.catmull_rom_step;
        }

        self
    }

    /// Modell-Konfiguration aus den Optionen.
    pub fn curve_config(&self) -> CurveConfig {
        CurveConfig {
            width: self.canvas_width,
            height: self.canvas_height,
            proximity: self.proximity,
            pick_radius: self.pick_radius,
            catmull_rom_step: self.catmull_rom_step,
        }
    }
}

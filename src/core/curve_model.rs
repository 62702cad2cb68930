//! Kurvenmodell: geordnete Kontrollpunkte mit Abstands- und Randbedingungen,
//! lineare und Catmull-Rom-Abtastung sowie Marker-Abbildung.

use super::control_point::{ControlPoint, ControlPointId};
use super::interpolation::InterpolationMode;
use crate::shared::spline_geometry::{catmull_rom_chain, point_at_fraction};
use glam::Vec2;

/// Standard-Mindestabstand (x) zwischen benachbarten Kontrollpunkten.
pub const DEFAULT_PROXIMITY: f32 = 10.0;
/// Standard-Trefferradius für `find_point_near`.
pub const DEFAULT_PICK_RADIUS: f32 = 10.0;
/// Standard-Schrittweite der Catmull-Rom-Abtastung.
pub const DEFAULT_CATMULL_ROM_STEP: f64 = 0.01;
/// Abstand der Endpunkte vom unteren Rand bei der Standardbelegung.
const ENDPOINT_BOTTOM_MARGIN: f32 = 50.0;

/// Unveränderliche Konfiguration eines `CurveModel`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveConfig {
    /// Canvas-Breite
    pub width: f32,
    /// Canvas-Höhe
    pub height: f32,
    /// Minimaler horizontaler Abstand benachbarter Punkte beim Verschieben
    pub proximity: f32,
    /// Trefferradius für Pointer-Hit-Tests
    pub pick_radius: f32,
    /// Schrittweite für `t` bei der Catmull-Rom-Abtastung
    pub catmull_rom_step: f64,
}

impl CurveConfig {
    /// Konfiguration mit Standardwerten für eine Canvas-Größe.
    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 200.0,
            proximity: DEFAULT_PROXIMITY,
            pick_radius: DEFAULT_PICK_RADIUS,
            catmull_rom_step: DEFAULT_CATMULL_ROM_STEP,
        }
    }
}

/// Besitzt die Kontrollpunkte einer Kurve.
///
/// Invarianten:
/// - nach x aufsteigend sortiert
/// - erster und letzter Punkt sind `fixed` und werden nie entfernt
/// - nach `move_point` liegt der Punkt mindestens `proximity` von seinen Nachbarn
///   entfernt und innerhalb von `[0, width] × [0, height]`
///
/// `add_point` erzwingt weder Mindestabstand noch Canvas-Grenzen.
#[derive(Debug, Clone)]
pub struct CurveModel {
    config: CurveConfig,
    points: Vec<ControlPoint>,
    next_id: ControlPointId,
}

impl CurveModel {
    /// Erstellt ein Modell mit der Standardbelegung (2 feste Endpunkte, 2 freie Punkte).
    pub fn new(config: CurveConfig) -> Self {
        let w = config.width;
        let h = config.height;
        let mut model = Self {
            config,
            points: Vec::with_capacity(4),
            next_id: 1,
        };

        let initial = [
            (Vec2::new(0.0, h - ENDPOINT_BOTTOM_MARGIN), true),
            (Vec2::new(w / 3.0, 50.0), false),
            (Vec2::new(w / 3.0 * 2.0, 150.0), false),
            (Vec2::new(w, h - ENDPOINT_BOTTOM_MARGIN), true),
        ];
        for (position, fixed) in initial {
            let id = model.allocate_id();
            model.points.push(ControlPoint::new(id, position, fixed));
        }
        model
    }

    fn allocate_id(&mut self) -> ControlPointId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Konfiguration des Modells.
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Read-only Sicht auf alle Kontrollpunkte (nach x sortiert).
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Immer `false`: die Endpunkte existieren ab Konstruktion.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sucht einen Kontrollpunkt per ID.
    pub fn point(&self, id: ControlPointId) -> Option<&ControlPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    fn index_of(&self, id: ControlPointId) -> Option<usize> {
        self.points.iter().position(|p| p.id == id)
    }

    /// Fügt einen freien Punkt bei `(x, y)` ein und sortiert neu nach x.
    ///
    /// Kein Mindestabstand, keine Begrenzung auf den Canvas.
    pub fn add_point(&mut self, x: f32, y: f32) -> ControlPointId {
        let id = self.allocate_id();
        self.points
            .push(ControlPoint::new(id, Vec2::new(x, y), false));
        // Stabil: bei gleichem x bleibt die Einfügereihenfolge erhalten
        self.points.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
        log::debug!("Kontrollpunkt {} bei ({:.1}, {:.1}) eingefügt", id, x, y);
        id
    }

    /// Entfernt einen freien Punkt. Feste oder unbekannte Punkte: No-op.
    ///
    /// Gibt `true` zurück, wenn ein Punkt entfernt wurde.
    pub fn remove_point(&mut self, id: ControlPointId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if self.points[index].fixed {
            return false;
        }
        self.points.remove(index);
        log::debug!("Kontrollpunkt {} entfernt", id);
        true
    }

    /// Verschiebt einen Punkt unter Einhaltung von Nachbarabstand und Canvas-Grenzen.
    ///
    /// Feste Punkte behalten ihr x, y bleibt frei. Unbekannte IDs: No-op.
    /// Gibt `true` zurück, wenn der Punkt existiert.
    pub fn move_point(&mut self, id: ControlPointId, x: f32, y: f32) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };

        let proximity = self.config.proximity;
        let mut x = x;
        if let Some(prev) = index.checked_sub(1).map(|i| self.points[i]) {
            x = x.max(prev.position.x + proximity);
        }
        if let Some(next) = self.points.get(index + 1) {
            x = x.min(next.position.x - proximity);
        }

        // Kein clamp(): width/height dürfen negativ oder NaN sein
        let (width, height) = (self.config.width, self.config.height);
        let point = &mut self.points[index];
        if !point.fixed {
            point.position.x = x.min(width).max(0.0);
        }
        point.position.y = y.min(height).max(0.0);
        true
    }

    /// Erster Punkt (in Sortierreihenfolge) mit Abstand `< radius` zu `(x, y)`.
    pub fn find_point_near(&self, x: f32, y: f32, radius: f32) -> Option<&ControlPoint> {
        let target = Vec2::new(x, y);
        self.points
            .iter()
            .find(|p| p.position.distance(target) < radius)
    }

    /// Positionen der Kontrollpunkte in Reihenfolge (Polyline der linearen Hüllkurve).
    pub fn sample_linear(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Catmull-Rom-Abtastung mit Schrittweite `step`.
    pub fn sample_catmull_rom(&self, step: f64) -> Vec<Vec2> {
        catmull_rom_chain(&self.sample_linear(), step)
    }

    /// Abtastung im gegebenen Modus (Catmull-Rom mit konfigurierter Schrittweite).
    pub fn sample(&self, mode: InterpolationMode) -> Vec<Vec2> {
        match mode {
            InterpolationMode::Linear => self.sample_linear(),
            InterpolationMode::CatmullRom => self.sample_catmull_rom(self.config.catmull_rom_step),
        }
    }

    /// Marker auf der linearen Hüllkurve bei Bogenlängen-Anteil `position`.
    pub fn marker_on_linear(&self, position: f32) -> Vec2 {
        let polyline = self.sample_linear();
        point_at_fraction(&polyline, position).unwrap_or(Vec2::ZERO)
    }

    /// Marker auf der Catmull-Rom-Kurve: Sample bei Index `floor(position × (len − 1))`.
    ///
    /// Parametrische Abbildung über den Sample-Index, nicht über die Bogenlänge.
    pub fn marker_on_curve(&self, position: f32) -> Vec2 {
        let samples = self.sample_catmull_rom(self.config.catmull_rom_step);
        marker_at_sample_index(&samples, position)
    }

    /// Marker im gegebenen Modus.
    pub fn marker(&self, mode: InterpolationMode, position: f32) -> Vec2 {
        match mode {
            InterpolationMode::Linear => self.marker_on_linear(position),
            InterpolationMode::CatmullRom => self.marker_on_curve(position),
        }
    }
}

/// Sample bei Index `floor(position × (len − 1))`, auf gültige Indizes begrenzt.
pub fn marker_at_sample_index(samples: &[Vec2], position: f32) -> Vec2 {
    let Some(last_index) = samples.len().checked_sub(1) else {
        return Vec2::ZERO;
    };
    let raw = (position * last_index as f32).floor();
    // `as usize` sättigt negative Werte und NaN auf 0
    let index = (raw as usize).min(last_index);
    samples[index]
}

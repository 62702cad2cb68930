//! Core-Domänentypen: Kontrollpunkte, Kurvenmodell, Interpolationsmodus.

pub mod control_point;
/// Kurvenmodell mit Abtastung und Marker-Abbildung
///
/// Einziger Besitzer der Kontrollpunkte. Aufrufer erhalten nur
/// read-only Slices oder Wertkopien.
pub mod curve_model;
pub mod interpolation;

pub use control_point::{ControlPoint, ControlPointId};
pub use curve_model::{
    marker_at_sample_index, CurveConfig, CurveModel, DEFAULT_CATMULL_ROM_STEP,
    DEFAULT_PICK_RADIUS, DEFAULT_PROXIMITY,
};
pub use interpolation::InterpolationMode;

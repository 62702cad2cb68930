//! Bedienpanel: Marker-Schieberegler, Interpolations-Umschalter, Farben.

use crate::app::{AppIntent, EditorState};
use crate::core::InterpolationMode;

/// Wertebereich des Marker-Schiebereglers (0 ..= SLIDER_MAX).
pub const SLIDER_MAX: f32 = 100.0;

/// Rendert das Bedienpanel und gibt die erzeugten Intents zurück.
///
/// `slider_value` ist UI-Zustand des Hosts; das Modell sieht nur die
/// normalisierte Position.
pub fn render_control_panel(
    ui: &mut egui::Ui,
    state: &EditorState,
    slider_value: &mut f32,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.heading("Marker");
    if ui
        .add(egui::Slider::new(slider_value, 0.0..=SLIDER_MAX))
        .changed()
    {
        events.push(AppIntent::MarkerSliderChanged {
            value: *slider_value,
            max: SLIDER_MAX,
        });
    }

    ui.separator();
    ui.heading("Interpolation");
    let mut catmull_rom = state.interpolation == InterpolationMode::CatmullRom;
    if ui.checkbox(&mut catmull_rom, "Catmull-Rom").changed() {
        let mode = if catmull_rom {
            InterpolationMode::CatmullRom
        } else {
            InterpolationMode::Linear
        };
        events.push(AppIntent::InterpolationModeChanged { mode });
    }

    ui.separator();
    ui.heading("Farben");
    let mut colors = state.options.colors;
    let mut changed = false;
    for (label, rgba) in [
        ("Kontrollpunkt", &mut colors.control_point),
        ("Fester Punkt", &mut colors.fixed_point),
        ("Kurve", &mut colors.line),
        ("Verbindung", &mut colors.control_line),
        ("Marker", &mut colors.marker),
    ] {
        ui.horizontal(|ui| {
            changed |= ui.color_edit_button_rgba_unmultiplied(rgba).changed();
            ui.label(label);
        });
    }
    if changed {
        events.push(AppIntent::ColorsChanged { colors });
    }

    ui.separator();
    ui.label(format!(
        "Kontrollpunkte: {}",
        state.model().control_points().len()
    ));
    if let Some(id) = state.dragging {
        ui.label(format!("Ziehe Punkt {id}"));
    }

    events
}

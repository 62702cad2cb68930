//! Zeichnet eine `RenderScene` mit dem egui-Painter.
//!
//! Reihenfolge wie im Canvas: Hintergrund, Kontrollpunkt-Linien, Kurve,
//! Handles, Marker.

use crate::shared::RenderScene;
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke};

/// Konvertiert eine RGBA-Farbe (0.0 ..= 1.0) nach egui.
pub fn color32(rgba: [f32; 4]) -> Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Malt die komplette Szene in `rect` (lokaler Ursprung = `rect.min`).
pub fn paint_scene(painter: &Painter, rect: Rect, scene: &RenderScene) {
    let to_screen = |p: glam::Vec2| Pos2::new(rect.min.x + p.x, rect.min.y + p.y);
    let colors = &scene.colors;

    painter.rect_filled(rect, 0.0, color32(colors.background));

    let control_line: Vec<Pos2> = scene
        .control_points
        .iter()
        .map(|p| to_screen(p.position))
        .collect();
    if control_line.len() >= 2 {
        painter.add(Shape::line(
            control_line,
            Stroke::new(scene.control_line_width, color32(colors.control_line)),
        ));
    }

    let curve: Vec<Pos2> = scene.curve.iter().copied().map(to_screen).collect();
    if curve.len() >= 2 {
        painter.add(Shape::line(
            curve,
            Stroke::new(scene.curve_line_width, color32(colors.line)),
        ));
    }

    for point in &scene.control_points {
        let color = if point.fixed {
            colors.fixed_point
        } else {
            colors.control_point
        };
        painter.circle_filled(to_screen(point.position), scene.handle_radius, color32(color));
    }

    if let Some(marker) = scene.marker {
        painter.circle_filled(to_screen(marker), scene.handle_radius, color32(colors.marker));
    }
}

//! Canvas-Input-Handling: Maus-Events → AppIntent.

use crate::app::AppIntent;

/// Sammelt Pointer-Events des Canvas und gibt AppIntents zurück.
///
/// Positionen werden relativ zu `response.rect.min` geliefert. Drücken zählt
/// nur innerhalb des Canvas, Bewegung und Loslassen überall, damit ein Drag
/// über den Rand hinaus sauber endet.
pub fn collect_canvas_events(ui: &egui::Ui, response: &egui::Response) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let origin = response.rect.min;
    let to_canvas = |p: egui::Pos2| glam::Vec2::new(p.x - origin.x, p.y - origin.y);

    let (pressed, released, moving, pointer_pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.is_moving(),
            i.pointer.interact_pos(),
        )
    });

    if let Some(pos) = pointer_pos {
        if pressed && response.rect.contains(pos) {
            events.push(AppIntent::PointerPressed {
                pos: to_canvas(pos),
            });
        }
        if moving {
            events.push(AppIntent::PointerMoved {
                pos: to_canvas(pos),
            });
        }
    }

    if released {
        events.push(AppIntent::PointerReleased);
    }

    if response.double_clicked_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(AppIntent::DoubleClicked {
                pos: to_canvas(pos),
            });
        }
    }

    events
}

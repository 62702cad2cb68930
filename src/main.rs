//! Neo Spline Editor.
//!
//! Interaktiver Kurven-Editor: Kontrollpunkte ziehen, per Doppelklick einfügen
//! oder entfernen, Marker entlang Catmull-Rom-Spline oder linearer Hüllkurve.

use eframe::egui;
use neo_spline_editor::{render, ui, AppIntent, EditorController, EditorOptions, EditorState};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Neo Spline Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([
                    editor_options.canvas_width + 280.0,
                    editor_options.canvas_height.max(320.0) + 40.0,
                ])
                .with_title("Neo Spline Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Neo Spline Editor",
            options,
            Box::new(move |_cc| Ok(Box::new(EditorApp::new(editor_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: EditorState,
    controller: EditorController,
    /// Rohwert des Marker-Schiebereglers (0 ..= ui::SLIDER_MAX)
    slider_value: f32,
}

impl EditorApp {
    fn new(options: EditorOptions) -> Self {
        Self {
            state: EditorState::new(options),
            controller: EditorController::new(),
            slider_value: 0.0,
        }
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            self.controller.handle_intent(&mut self.state, event);
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        egui::SidePanel::right("controls")
            .resizable(false)
            .show(ctx, |panel| {
                events.extend(ui::render_control_panel(
                    panel,
                    &self.state,
                    &mut self.slider_value,
                ));
            });

        egui::CentralPanel::default().show(ctx, |canvas_ui| {
            let [width, height] = {
                let config = self.state.model().config();
                [config.width, config.height]
            };
            let (rect, response) = canvas_ui
                .allocate_exact_size(egui::vec2(width, height), egui::Sense::click_and_drag());

            events.extend(ui::collect_canvas_events(canvas_ui, &response));
            self.process_events(std::mem::take(&mut events));

            let scene = self.controller.build_render_scene(&self.state);
            render::paint_scene(canvas_ui.painter(), rect, &scene);
        });

        if self.state.take_redraw_request() {
            ctx.request_repaint();
        }
    }
}

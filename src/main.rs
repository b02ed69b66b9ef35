//! Curve Plotter.
//!
//! Fenster-Host für den numerischen Kern: zeichnet die Beispielszene
//! bei jedem Bildschirm-Refresh vollständig neu.

use eframe::egui;
use curve_plotter::{EguiSurface, Plotter, PlotterOptions, Scene, Viewport};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Curve Plotter v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = PlotterOptions::config_path();
        let options = PlotterOptions::load_from_file(&config_path);

        // Ungültige Weltgrenzen sofort melden, nicht erst im ersten Frame
        let [width, height] = options.window_size;
        let viewport = options.viewport(width as f64, height as f64)?;

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(options.window_size)
                .with_title("Curve Plotter"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Curve Plotter",
            native_options,
            Box::new(move |_cc| Ok(Box::new(PlotterApp::new(options, viewport)))),
        )
        .map_err(|e| anyhow::anyhow!("Fenster konnte nicht geöffnet werden: {e}"))
    }
}

/// Haupt-Anwendungsstruktur
struct PlotterApp {
    options: PlotterOptions,
    viewport: Viewport,
    scene: Scene,
}

impl PlotterApp {
    fn new(options: PlotterOptions, viewport: Viewport) -> Self {
        Self {
            options,
            viewport,
            scene: Scene::demo(),
        }
    }

    /// Passt die Geräte-Größe an die Panel-Größe an; Welt-Grenzen bleiben fest.
    fn sync_device_size(&mut self, rect: egui::Rect) {
        let (width, height) = (rect.width() as f64, rect.height() as f64);
        if self.viewport.device_width() != width || self.viewport.device_height() != height {
            self.viewport = self.viewport.with_device_size(width, height);
            log::debug!("Viewport-Größe: {}x{}", width, height);
        }
    }
}

impl eframe::App for PlotterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
                self.sync_device_size(rect);

                let painter = ui.painter_at(rect);
                let mut surface = EguiSurface::new(&painter, rect, self.options.stroke_width);
                Plotter::new(&mut surface, &self.viewport, &self.options).draw_scene(&self.scene);
            });

        // Animations-Schleife: jeder Refresh zeichnet die Szene komplett neu
        ctx.request_repaint();
    }
}

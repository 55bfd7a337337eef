//! Top-level entry point for running the chart in a native window.

use eframe::egui;

use crate::config::ChartConfig;
use crate::data::record::Dataset;

use super::ScatterApp;

/// Height reserved for the toolbar above the chart.
const TOOLBAR_HEIGHT: f32 = 40.0;

/// Load the dataset named in `cfg` and open the chart window.
///
/// A failed load does not abort: the window opens and shows the error in
/// place of the chart. The call blocks until the window is closed.
pub fn run_scatter(cfg: ChartConfig) -> eframe::Result<()> {
    let dataset = Dataset::load(&cfg.data_path);
    if let Err(e) = &dataset {
        tracing::error!(path = %cfg.data_path.display(), error = %e, "failed to load dataset");
    }
    let app = ScatterApp::new(dataset, &cfg);

    let [w, h] = cfg.layout.canvas_size();
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(cfg.title.clone())
            .with_inner_size(egui::vec2(w as f32, h as f32 + TOOLBAR_HEIGHT)),
        ..Default::default()
    };

    eframe::run_native(
        &cfg.title,
        opts,
        Box::new(|cc| {
            // Phosphor icon font for toolbar buttons.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

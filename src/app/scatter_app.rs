//! Standalone application wrapper implementing [`eframe::App`].

use eframe::egui;
use egui_phosphor::regular::{FLOPPY_DISK, IMAGE};

use crate::chart::{Chart, ClickOutcome};
use crate::color_scheme::ColorScheme;
use crate::config::ChartConfig;
use crate::data::record::Dataset;
use crate::data::selection::LabelClick;
use crate::error::ChartError;
use crate::export;

use super::chart_ui::show_chart;

/// PNG exports are rendered at twice the view size.
const PNG_EXPORT_SCALE: f32 = 2.0;

const IGNORED_CLICK_STATUS: &str = "Transition running, click ignored";

/// Either a ready chart or the reason the dataset could not be loaded.
enum LoadState {
    Ready(Chart),
    Failed(String),
}

pub struct ScatterApp {
    state: LoadState,
    color_scheme: ColorScheme,
    /// Scheme last pushed into the egui context.
    applied_scheme: Option<ColorScheme>,
    /// Last export result or ignored click, shown in the toolbar.
    status: Option<String>,
}

impl ScatterApp {
    /// Build the app from an already-attempted dataset load.
    pub fn new(dataset: Result<Dataset, ChartError>, cfg: &ChartConfig) -> Self {
        let state = match dataset {
            Ok(ds) => LoadState::Ready(Chart::from_config(ds, cfg)),
            Err(e) => LoadState::Failed(format!(
                "Could not load {}: {e}",
                cfg.data_path.display()
            )),
        };
        Self {
            state,
            color_scheme: cfg.color_scheme,
            applied_scheme: None,
            status: None,
        }
    }

    pub fn chart(&self) -> Option<&Chart> {
        match &self.state {
            LoadState::Ready(c) => Some(c),
            LoadState::Failed(_) => None,
        }
    }

    /// Why the dataset could not be loaded, as shown in the window.
    pub fn load_error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Ready(_) => None,
            LoadState::Failed(msg) => Some(msg),
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Dispatch a title click. A click dropped by the transition policy is
    /// reported in the toolbar; the next accepted one clears that note.
    pub fn handle_click(&mut self, click: LabelClick, now: f64) -> Option<ClickOutcome> {
        let LoadState::Ready(chart) = &mut self.state else {
            return None;
        };
        let outcome = chart.click(click, now);
        match outcome {
            ClickOutcome::Ignored => self.status = Some(IGNORED_CLICK_STATUS.to_string()),
            ClickOutcome::Switched if self.status.as_deref() == Some(IGNORED_CLICK_STATUS) => {
                self.status = None;
            }
            _ => {}
        }
        Some(outcome)
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let ready = matches!(self.state, LoadState::Ready(_));
            if ui
                .add_enabled(ready, egui::Button::new(format!("{FLOPPY_DISK} Save SVG")))
                .clicked()
            {
                self.export_dialog("svg");
            }
            if ui
                .add_enabled(ready, egui::Button::new(format!("{IMAGE} Save PNG")))
                .clicked()
            {
                self.export_dialog("png");
            }
            ui.separator();
            egui::ComboBox::from_id_salt("color_scheme")
                .selected_text(self.color_scheme.label())
                .show_ui(ui, |ui| {
                    for scheme in ColorScheme::all() {
                        ui.selectable_value(&mut self.color_scheme, *scheme, scheme.label());
                    }
                });
            if let Some(status) = &self.status {
                ui.separator();
                ui.label(status);
            }
        });
    }

    fn export_dialog(&mut self, ext: &str) {
        let LoadState::Ready(chart) = &self.state else {
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(export::default_file_name(ext))
            .add_filter(ext.to_uppercase(), &[ext])
            .save_file()
        else {
            return;
        };
        let colors = self.color_scheme.colors();
        let res = match ext {
            "png" => export::save_png(&path, chart.scene(), chart.layout(), &colors, PNG_EXPORT_SCALE),
            _ => export::save_svg(&path, chart.scene(), chart.layout(), &colors),
        };
        self.status = Some(match res {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => {
                tracing::warn!(error = %e, "export failed");
                format!("Export failed: {e}")
            }
        });
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_scheme != Some(self.color_scheme) {
            self.color_scheme.apply(ctx);
            self.applied_scheme = Some(self.color_scheme);
        }

        egui::TopBottomPanel::top("censusplot_toolbar").show(ctx, |ui| {
            self.toolbar(ui);
        });

        let now = ctx.input(|i| i.time);
        let colors = self.color_scheme.colors();
        let mut clicked = None;
        egui::CentralPanel::default().show(ctx, |ui| match &self.state {
            LoadState::Ready(chart) => clicked = show_chart(ui, chart, &colors, now),
            LoadState::Failed(msg) => {
                ui.heading("No data");
                ui.colored_label(ui.visuals().error_fg_color, msg.as_str());
            }
        });
        if let Some(click) = clicked {
            self.handle_click(click, now);
        }

        if let LoadState::Ready(chart) = &mut self.state {
            if chart.is_animating(now) {
                ctx.request_repaint();
            } else {
                chart.settle(now);
            }
        }
    }
}

//! The chart area of the window.
//!
//! Axes, marks and state abbreviations go through an `egui_plot::Plot` whose
//! bounds follow the animated scale domains. The six axis titles are plain
//! clickable labels in panels around the plot.

use std::ops::RangeInclusive;

use eframe::egui;
use eframe::egui::{Pos2, RichText, Sense};
use egui_plot::{MarkerShape, Plot, PlotPoint, PlotUi, Points, Text};

use crate::chart::Chart;
use crate::color_scheme::ChartColors;
use crate::data::field::Axis;
use crate::data::selection::{AxisLabel, LabelClick, LabelStyle};
use crate::export::ticks::format_tick;

/// Width of the column holding the vertical axis titles.
const Y_TITLE_WIDTH: f32 = 180.0;

/// Draw one frame of the chart. Returns the title the user clicked, if any.
pub(crate) fn show_chart(
    ui: &mut egui::Ui,
    chart: &Chart,
    colors: &ChartColors,
    now: f64,
) -> Option<LabelClick> {
    let title_size = chart.layout().title_font_size as f32;
    let mut clicked = None;

    ui.painter()
        .rect_filled(ui.max_rect(), egui::CornerRadius::ZERO, colors.background);

    egui::TopBottomPanel::bottom("x_titles")
        .resizable(false)
        .show_separator_line(false)
        .frame(egui::Frame::NONE)
        .show_inside(ui, |ui| {
            ui.vertical_centered(|ui| {
                for label in chart.labels(Axis::Horizontal) {
                    if title(ui, &label, title_size, colors) {
                        clicked = Some(label.click);
                    }
                }
            });
        });

    egui::SidePanel::left("y_titles")
        .resizable(false)
        .show_separator_line(false)
        .exact_width(Y_TITLE_WIDTH)
        .frame(egui::Frame::NONE)
        .show_inside(ui, |ui| {
            ui.add_space(ui.available_height() * 0.4);
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                for label in chart.labels(Axis::Vertical) {
                    if title(ui, &label, title_size, colors) {
                        clicked = Some(label.click);
                    }
                }
            });
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show_inside(ui, |ui| plot_area(ui, chart, colors, now));

    clicked
}

fn plot_area(ui: &mut egui::Ui, chart: &Chart, colors: &ChartColors, now: f64) {
    let layout = *chart.layout();
    let frame = chart.frame(now);
    let points = frame.plot_points();
    let x_bounds = plot_range(frame.x_scale.domain);
    let y_bounds = plot_range(frame.y_scale.domain);

    // Keep the view box aspect ratio inside whatever space is left.
    let aspect = (layout.chart_width() / layout.chart_height()) as f32;
    let avail = ui.available_size();
    let width = avail.x.min(avail.y * aspect).max(1.0);
    let fill = colors.circle.gamma_multiply(layout.circle_opacity as f32);

    let resp = Plot::new("census_scatter")
        .width(width)
        .height(width / aspect)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_x(false)
        .show_y(false)
        .show_grid(false)
        .show_background(false)
        .x_axis_formatter(|mark, _range| format_tick(mark.value, mark.step_size))
        .y_axis_formatter(|mark, _range| format_tick(mark.value, mark.step_size))
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(x_bounds);
            plot_ui.set_plot_bounds_y(y_bounds);

            // Marks are sized in view units, like the exported document.
            let zoom = plot_ui.transform().frame().width() / layout.chart_width() as f32;
            let radius = (layout.circle_radius as f32 * zoom).max(1.0);
            let font_size = (layout.font_size as f32 * zoom).max(1.0);

            plot_ui.points(
                Points::new("states", points.clone())
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(radius)
                    .color(fill),
            );
            for (mark, p) in chart.scene().marks.iter().zip(&points) {
                plot_ui.text(Text::new(
                    "abbr",
                    PlotPoint::new(p[0], p[1]),
                    RichText::new(&mark.abbr).size(font_size).color(colors.abbr),
                ));
            }

            let hovered = plot_ui
                .response()
                .hover_pos()
                .and_then(|pointer| nearest_mark(plot_ui, &points, pointer, radius));
            if let Some(p) = hovered.and_then(|i| points.get(i)) {
                plot_ui.points(
                    Points::new("hovered", vec![*p])
                        .shape(MarkerShape::Circle)
                        .filled(false)
                        .radius(radius)
                        .color(colors.hover_stroke),
                );
            }
            hovered
        });

    if let Some(record) = resp.inner.and_then(|i| chart.dataset().get(i)) {
        let tip = chart.tooltip(record);
        resp.response.on_hover_ui_at_pointer(|ui| {
            ui.strong(&tip.title);
            ui.label(&tip.x_line);
            ui.label(&tip.y_line);
        });
    }
}

/// Plot bounds for a scale domain; a zero-width domain is widened so the
/// plot still has an area to draw into.
fn plot_range((lo, hi): (f64, f64)) -> RangeInclusive<f64> {
    if hi > lo {
        lo..=hi
    } else {
        lo - 1.0..=lo + 1.0
    }
}

/// Index of the mark closest to `pointer` within `radius` screen points.
/// Ties go to the later mark, which is drawn on top.
fn nearest_mark(
    plot_ui: &PlotUi,
    points: &[[f64; 2]],
    pointer: Pos2,
    radius: f32,
) -> Option<usize> {
    let mut best = None;
    let mut best_d2 = radius * radius;
    for (i, p) in points.iter().enumerate() {
        let d2 = plot_ui
            .screen_from_plot(PlotPoint::new(p[0], p[1]))
            .distance_sq(pointer);
        if d2 <= best_d2 {
            best_d2 = d2;
            best = Some(i);
        }
    }
    best
}

/// An axis title as a clickable label. Returns whether it was clicked.
fn title(ui: &mut egui::Ui, label: &AxisLabel, size: f32, colors: &ChartColors) -> bool {
    let text = RichText::new(label.text).size(size);
    let text = match label.style {
        LabelStyle::Active => text.strong().color(colors.active_title),
        LabelStyle::Inactive => text.color(colors.inactive_title),
    };
    ui.add(egui::Label::new(text).selectable(false).sense(Sense::click()))
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}

//! Static SVG rendering of a settled chart.
//!
//! The document mirrors what the window shows once a transition has
//! finished: axes with ticks, one translucent circle and one abbreviation per
//! record, and the six axis titles carrying `active` / `inactive` classes.

use std::fmt::Write;

use eframe::egui::Color32;

use crate::color_scheme::ChartColors;
use crate::data::field::Axis;
use crate::data::layout::ChartLayout;
use crate::data::scale::LinearScale;
use crate::data::scene::Scene;
use crate::data::selection::{AxisLabel, LabelStyle};

use super::ticks::{format_tick, tick_step, ticks};

fn hex(c: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn title_color(label: &AxisLabel, colors: &ChartColors) -> String {
    match label.style {
        LabelStyle::Active => hex(colors.active_title),
        LabelStyle::Inactive => hex(colors.inactive_title),
    }
}

pub fn render(scene: &Scene, layout: &ChartLayout, colors: &ChartColors) -> String {
    let [w, h] = layout.canvas_size();
    let cw = layout.chart_width();
    let ch = layout.chart_height();
    let axis = hex(colors.axis);
    let mut s = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#
    );
    let _ = writeln!(s, r#"<rect width="{w}" height="{h}" fill="{}"/>"#, hex(colors.background));
    let _ = writeln!(
        s,
        r#"<g transform="translate({}, {})">"#,
        layout.margin.left, layout.margin.top
    );

    write_x_axis(&mut s, &scene.x_scale, layout, cw, ch, &axis);
    write_y_axis(&mut s, &scene.y_scale, layout, ch, &axis);

    let circle = hex(colors.circle);
    for m in &scene.marks {
        let _ = writeln!(
            s,
            r#"<circle class="stateCircle" cx="{:.2}" cy="{:.2}" r="{}" fill="{circle}" opacity="{}"/>"#,
            m.pos[0], m.pos[1], layout.circle_radius, layout.circle_opacity
        );
    }
    let abbr = hex(colors.abbr);
    for m in &scene.marks {
        let _ = writeln!(
            s,
            r#"<text class="stateText" x="{:.2}" y="{:.2}" dy="3" font-size="{}" text-anchor="middle" fill="{abbr}">{}</text>"#,
            m.pos[0],
            m.pos[1],
            layout.font_size,
            escape(&m.abbr)
        );
    }

    for (i, label) in scene.selection.labels(Axis::Horizontal).iter().enumerate() {
        let [x, y] = layout.x_title_pos(i);
        let _ = writeln!(
            s,
            r#"<text class="aText {}" x="{x}" y="{y}" value="{}" font-size="{}" text-anchor="middle" fill="{}">{}</text>"#,
            label.style.class(),
            label.click.field().key(),
            layout.title_font_size,
            title_color(label, colors),
            escape(label.text)
        );
    }
    for (i, label) in scene.selection.labels(Axis::Vertical).iter().enumerate() {
        let [x, y] = layout.y_title_pos(i);
        let _ = writeln!(
            s,
            r#"<text class="aText {}" transform="translate({x}, {y}) rotate(-90)" value="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle" fill="{}">{}</text>"#,
            label.style.class(),
            label.click.field().key(),
            layout.title_font_size,
            title_color(label, colors),
            escape(label.text)
        );
    }

    s.push_str("</g>\n</svg>\n");
    s
}

fn write_x_axis(s: &mut String, scale: &LinearScale, layout: &ChartLayout, cw: f64, ch: f64, axis: &str) {
    let step = tick_step(scale, layout.tick_count).unwrap_or(1.0);
    let _ = writeln!(s, r#"<g class="x-axis" transform="translate(0, {ch})">"#);
    let _ = writeln!(s, r#"<line x1="0" y1="0" x2="{cw}" y2="0" stroke="{axis}"/>"#);
    for v in ticks(scale, layout.tick_count) {
        let x = scale.apply(v);
        let _ = writeln!(
            s,
            r#"<line x1="{x:.2}" y1="0" x2="{x:.2}" y2="{}" stroke="{axis}"/><text x="{x:.2}" y="{}" font-size="{}" text-anchor="middle" fill="{axis}">{}</text>"#,
            layout.tick_size,
            layout.tick_size + 3.0 + layout.font_size,
            layout.font_size,
            format_tick(v, step)
        );
    }
    s.push_str("</g>\n");
}

fn write_y_axis(s: &mut String, scale: &LinearScale, layout: &ChartLayout, ch: f64, axis: &str) {
    let step = tick_step(scale, layout.tick_count).unwrap_or(1.0);
    let _ = writeln!(s, r#"<g class="y-axis">"#);
    let _ = writeln!(s, r#"<line x1="0" y1="0" x2="0" y2="{ch}" stroke="{axis}"/>"#);
    for v in ticks(scale, layout.tick_count) {
        let y = scale.apply(v);
        let _ = writeln!(
            s,
            r#"<line x1="0" y1="{y:.2}" x2="-{}" y2="{y:.2}" stroke="{axis}"/><text x="-{}" y="{y:.2}" dy="0.32em" font-size="{}" text-anchor="end" fill="{axis}">{}</text>"#,
            layout.tick_size,
            layout.tick_size + 3.0,
            layout.font_size,
            format_tick(v, step)
        );
    }
    s.push_str("</g>\n");
}

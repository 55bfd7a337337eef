//! Color schemes for the chart and the surrounding egui chrome.

use eframe::egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};

/// Visual theme for the chart window and exported images.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// White page with light-blue circles.
    #[default]
    Light,
    /// Dark background; titles and axes are inverted.
    Dark,
}

/// Concrete colors used when drawing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChartColors {
    pub background: Color32,
    pub axis: Color32,
    pub circle: Color32,
    pub abbr: Color32,
    pub active_title: Color32,
    pub inactive_title: Color32,
    pub hover_stroke: Color32,
}

impl ColorScheme {
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Light, ColorScheme::Dark]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Light => "Light",
            ColorScheme::Dark => "Dark",
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        match self {
            ColorScheme::Light => ctx.set_visuals(Visuals::light()),
            ColorScheme::Dark => ctx.set_visuals(Visuals::dark()),
        }
    }

    pub fn colors(&self) -> ChartColors {
        let circle = Color32::from_rgb(0x89, 0xbd, 0xd3);
        match self {
            ColorScheme::Light => ChartColors {
                background: Color32::WHITE,
                axis: Color32::BLACK,
                circle,
                abbr: Color32::WHITE,
                active_title: Color32::BLACK,
                inactive_title: Color32::from_rgb(0xaa, 0xaa, 0xaa),
                hover_stroke: Color32::BLACK,
            },
            ColorScheme::Dark => ChartColors {
                background: Color32::from_rgb(0x1b, 0x1b, 0x1b),
                axis: Color32::from_gray(0xdd),
                circle,
                abbr: Color32::WHITE,
                active_title: Color32::WHITE,
                inactive_title: Color32::from_gray(0x70),
                hover_stroke: Color32::WHITE,
            },
        }
    }
}

//! Chart geometry in view units.
//!
//! All drawing is done in a fixed coordinate space (1024×768 by default) that
//! the UI scales uniformly into whatever area is available.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 10.0,
            bottom: 0.0,
            left: 100.0,
            right: 40.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    /// Extra space below the view box for the horizontal axis titles.
    pub label_band: f64,
    pub circle_radius: f64,
    pub circle_opacity: f64,
    pub font_size: f64,
    pub title_font_size: f64,
    /// Spacing between stacked axis titles.
    pub title_spacing: f64,
    /// Ticks requested per axis in exported documents.
    pub tick_count: usize,
    pub tick_size: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            margin: Margin::default(),
            label_band: 90.0,
            circle_radius: 14.0,
            circle_opacity: 0.5,
            font_size: 10.0,
            title_font_size: 16.0,
            title_spacing: 20.0,
            tick_count: 10,
            tick_size: 6.0,
        }
    }
}

impl ChartLayout {
    pub fn chart_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn chart_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Full drawing surface including the title band.
    pub fn canvas_size(&self) -> [f64; 2] {
        [self.width, self.height + self.label_band]
    }

    /// Baseline of the `i`-th horizontal axis title, relative to the plot origin.
    pub fn x_title_pos(&self, i: usize) -> [f64; 2] {
        [
            self.chart_width() / 2.0,
            self.chart_height() + 10.0 + self.margin.top + self.title_spacing * (i as f64 + 1.0),
        ]
    }

    /// Centre of the `i`-th vertical axis title, relative to the plot origin.
    /// Titles are rotated a quarter turn and stack outwards from the axis.
    pub fn y_title_pos(&self, i: usize) -> [f64; 2] {
        [
            -self.margin.left / 4.0 - self.title_spacing * (i as f64 + 1.0),
            self.chart_height() / 2.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plot_area() {
        let l = ChartLayout::default();
        assert_eq!(l.chart_width(), 884.0);
        assert_eq!(l.chart_height(), 758.0);
        assert_eq!(l.canvas_size(), [1024.0, 858.0]);
    }

    #[test]
    fn titles_stay_on_canvas() {
        let l = ChartLayout::default();
        let [_, bottom] = l.x_title_pos(2);
        assert!(bottom + l.margin.top < l.canvas_size()[1]);
        let [left, _] = l.y_title_pos(2);
        assert!(left + l.margin.left > 0.0);
    }
}

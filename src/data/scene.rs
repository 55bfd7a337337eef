//! The settled chart for one selection: two scales and one mark per record.

use crate::data::layout::ChartLayout;
use crate::data::record::Dataset;
use crate::data::scale::{x_scale, y_scale, LinearScale};
use crate::data::selection::Selection;

/// A circle with its state abbreviation, positioned in plot coordinates
/// (relative to the plot origin, y pointing down).
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Index of the record this mark belongs to.
    pub index: usize,
    pub abbr: String,
    pub pos: [f64; 2],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub selection: Selection,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub marks: Vec<Mark>,
}

impl Scene {
    pub fn build(dataset: &Dataset, selection: Selection, layout: &ChartLayout) -> Self {
        let xs = x_scale(dataset, selection.x_field(), layout.chart_width());
        let ys = y_scale(dataset, selection.y_field(), layout.chart_height());
        let marks = dataset
            .records()
            .iter()
            .enumerate()
            .map(|(index, r)| Mark {
                index,
                abbr: r.abbr.clone(),
                pos: [
                    xs.apply(r.value(selection.x_field())),
                    ys.apply(r.value(selection.y_field())),
                ],
            })
            .collect();
        Self {
            selection,
            x_scale: xs,
            y_scale: ys,
            marks,
        }
    }

    pub fn positions(&self) -> Vec<[f64; 2]> {
        self.marks.iter().map(|m| m.pos).collect()
    }
}

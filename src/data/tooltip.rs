//! Hover tooltip text for a record under the current selection.

use crate::data::field::Field;
use crate::data::record::Record;
use crate::data::selection::Selection;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipText {
    pub title: String,
    pub x_line: String,
    pub y_line: String,
}

impl TooltipText {
    pub fn lines(&self) -> [&str; 3] {
        [&self.title, &self.x_line, &self.y_line]
    }
}

fn value_line(record: &Record, field: Field) -> String {
    format!(
        "{} {}{}",
        field.tooltip_label(),
        record.value(field),
        field.value_suffix()
    )
}

pub fn tooltip_text(record: &Record, selection: Selection) -> TooltipText {
    TooltipText {
        title: record.state.clone(),
        x_line: value_line(record, selection.x_field()),
        y_line: value_line(record, selection.y_field()),
    }
}

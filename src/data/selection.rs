//! Which field is plotted on each axis, and the clickable axis titles.
//!
//! The selection is a plain `Copy` value. Clicks never mutate it in place;
//! [`Selection::apply`] returns the next selection and the UI swaps it in.

use serde::{Deserialize, Serialize};

use crate::data::field::{Axis, Field, XField, YField};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub x: XField,
    pub y: YField,
}

/// A click on one of the axis titles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LabelClick {
    X(XField),
    Y(YField),
}

impl LabelClick {
    pub fn field(self) -> Field {
        match self {
            LabelClick::X(x) => x.into(),
            LabelClick::Y(y) => y.into(),
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            LabelClick::X(_) => Axis::Horizontal,
            LabelClick::Y(_) => Axis::Vertical,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LabelStyle {
    Active,
    Inactive,
}

impl LabelStyle {
    /// CSS class used in SVG export.
    pub fn class(self) -> &'static str {
        match self {
            LabelStyle::Active => "active",
            LabelStyle::Inactive => "inactive",
        }
    }
}

/// One clickable axis title.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AxisLabel {
    pub click: LabelClick,
    pub text: &'static str,
    pub style: LabelStyle,
}

/// Which axes differ between two selections.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangedAxes {
    pub x: bool,
    pub y: bool,
}

impl ChangedAxes {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

impl Selection {
    pub fn new(x: XField, y: YField) -> Self {
        Self { x, y }
    }

    pub fn with_x(self, x: XField) -> Self {
        Self { x, ..self }
    }

    pub fn with_y(self, y: YField) -> Self {
        Self { y, ..self }
    }

    pub fn x_field(self) -> Field {
        self.x.into()
    }

    pub fn y_field(self) -> Field {
        self.y.into()
    }

    /// Next selection after a title click. The other axis is untouched.
    pub fn apply(self, click: LabelClick) -> Self {
        match click {
            LabelClick::X(x) => self.with_x(x),
            LabelClick::Y(y) => self.with_y(y),
        }
    }

    pub fn changed_axes(self, other: Selection) -> ChangedAxes {
        ChangedAxes {
            x: self.x != other.x,
            y: self.y != other.y,
        }
    }

    /// The three titles of an axis in display order; exactly one is active.
    pub fn labels(self, axis: Axis) -> [AxisLabel; 3] {
        match axis {
            Axis::Horizontal => XField::ALL.map(|x| AxisLabel {
                click: LabelClick::X(x),
                text: Field::from(x).axis_title(),
                style: if x == self.x {
                    LabelStyle::Active
                } else {
                    LabelStyle::Inactive
                },
            }),
            Axis::Vertical => YField::ALL.map(|y| AxisLabel {
                click: LabelClick::Y(y),
                text: Field::from(y).axis_title(),
                style: if y == self.y {
                    LabelStyle::Active
                } else {
                    LabelStyle::Inactive
                },
            }),
        }
    }

    /// All nine reachable selections.
    pub fn all() -> impl Iterator<Item = Selection> {
        XField::ALL
            .into_iter()
            .flat_map(|x| YField::ALL.into_iter().map(move |y| Selection::new(x, y)))
    }
}

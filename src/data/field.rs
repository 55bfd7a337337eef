//! The six selectable census measures and their display tables.
//!
//! Every lookup here is a total `match`: adding a variant fails to compile
//! until each table gets an entry, so no field can end up with a blank label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Which chart axis a field is plotted on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// One numeric measure of a [`Record`](crate::data::record::Record).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Poverty,
    Age,
    Income,
    Healthcare,
    Smokes,
    Obesity,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Poverty,
        Field::Age,
        Field::Income,
        Field::Healthcare,
        Field::Smokes,
        Field::Obesity,
    ];

    /// CSV column name, also accepted on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Field::Poverty => "poverty",
            Field::Age => "age",
            Field::Income => "income",
            Field::Healthcare => "healthcare",
            Field::Smokes => "smokes",
            Field::Obesity => "obesity",
        }
    }

    /// Label prefix used in the hover tooltip.
    pub fn tooltip_label(self) -> &'static str {
        match self {
            Field::Poverty => "Poverty:",
            Field::Age => "Age:",
            Field::Income => "Income:",
            Field::Healthcare => "Healthcare:",
            Field::Smokes => "Smokers:",
            Field::Obesity => "Obesity:",
        }
    }

    /// Clickable axis title.
    pub fn axis_title(self) -> &'static str {
        match self {
            Field::Poverty => "In Poverty %",
            Field::Age => "Age (Median)",
            Field::Income => "Household Income (Median)",
            Field::Healthcare => "Lacks Healthcare (%)",
            Field::Smokes => "Smokes (%)",
            Field::Obesity => "Obese (%)",
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Field::Poverty | Field::Age | Field::Income => Axis::Horizontal,
            Field::Healthcare | Field::Smokes | Field::Obesity => Axis::Vertical,
        }
    }

    /// Suffix appended after the value in the tooltip body.
    ///
    /// Poverty is the only horizontal measure shown as a percentage; every
    /// vertical measure is a percentage.
    pub fn value_suffix(self) -> &'static str {
        match self {
            Field::Poverty => "%",
            Field::Age | Field::Income => "",
            Field::Healthcare | Field::Smokes | Field::Obesity => "%",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Field::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ChartError::UnknownField(s.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-axis field subsets
// ─────────────────────────────────────────────────────────────────────────────

/// Field selectable on the horizontal axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XField {
    #[default]
    Poverty,
    Age,
    Income,
}

/// Field selectable on the vertical axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YField {
    #[default]
    Healthcare,
    Smokes,
    Obesity,
}

impl XField {
    /// Display order, top to bottom below the chart.
    pub const ALL: [XField; 3] = [XField::Poverty, XField::Age, XField::Income];
}

impl YField {
    /// Display order, innermost to outermost left of the chart.
    pub const ALL: [YField; 3] = [YField::Healthcare, YField::Smokes, YField::Obesity];
}

impl From<XField> for Field {
    fn from(x: XField) -> Self {
        match x {
            XField::Poverty => Field::Poverty,
            XField::Age => Field::Age,
            XField::Income => Field::Income,
        }
    }
}

impl From<YField> for Field {
    fn from(y: YField) -> Self {
        match y {
            YField::Healthcare => Field::Healthcare,
            YField::Smokes => Field::Smokes,
            YField::Obesity => Field::Obesity,
        }
    }
}

impl TryFrom<Field> for XField {
    type Error = ChartError;

    fn try_from(f: Field) -> Result<Self, Self::Error> {
        match f {
            Field::Poverty => Ok(XField::Poverty),
            Field::Age => Ok(XField::Age),
            Field::Income => Ok(XField::Income),
            other => Err(ChartError::WrongAxis {
                field: other,
                axis: Axis::Horizontal,
            }),
        }
    }
}

impl TryFrom<Field> for YField {
    type Error = ChartError;

    fn try_from(f: Field) -> Result<Self, Self::Error> {
        match f {
            Field::Healthcare => Ok(YField::Healthcare),
            Field::Smokes => Ok(YField::Smokes),
            Field::Obesity => Ok(YField::Obesity),
            other => Err(ChartError::WrongAxis {
                field: other,
                axis: Axis::Vertical,
            }),
        }
    }
}

impl FromStr for XField {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Field>()?.try_into()
    }
}

impl FromStr for YField {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Field>()?.try_into()
    }
}

impl fmt::Display for XField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Field::from(*self).fmt(f)
    }
}

impl fmt::Display for YField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Field::from(*self).fmt(f)
    }
}

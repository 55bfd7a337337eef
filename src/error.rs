//! Error type shared by loading, configuration and export.

use std::path::PathBuf;

use thiserror::Error;

use crate::data::field::{Axis, Field};

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// `record` is the 1-based position in the dataset, not a file line;
    /// CSV syntax errors carry their own line numbers.
    #[error("record {record} ({state}): {field} is not a finite number")]
    NonFinite {
        record: usize,
        state: String,
        field: Field,
    },

    #[error("dataset contains no records")]
    EmptyDataset,

    #[error("unknown field {0:?} (expected one of poverty, age, income, healthcare, smokes, obesity)")]
    UnknownField(String),

    #[error("{field} cannot be plotted on the {axis:?} axis")]
    WrongAxis { field: Field, axis: Axis },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("export failed: {0}")]
    Export(String),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

impl ChartError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ChartError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

//! Configuration for the scatter chart.
//!
//! Every field has a default, so a YAML file only needs to mention the
//! values it changes:
//!
//! ```yaml
//! data_path: data/acs_2014.csv
//! initial: { x: income, y: obesity }
//! transition: { duration_secs: 1.0, policy: ignore_while_running }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color_scheme::ColorScheme;
use crate::data::layout::ChartLayout;
use crate::data::selection::Selection;
use crate::data::transition::TransitionConfig;
use crate::error::{ChartError, Result};

pub const DEFAULT_DATA_PATH: &str = "assets/data/data.csv";

/// Top-level configuration.
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `title`        | Native window title |
/// | `data_path`    | CSV file to plot |
/// | `initial`      | Fields selected when the chart opens |
/// | `layout`       | View box, margins and mark sizes |
/// | `transition`   | Animation length and overlapping-click policy |
/// | `color_scheme` | Light or dark theme |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub data_path: PathBuf,
    pub initial: Selection,
    pub layout: ChartLayout,
    pub transition: TransitionConfig,
    pub color_scheme: ColorScheme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Census Scatter".to_string(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            initial: Selection::default(),
            layout: ChartLayout::default(),
            transition: TransitionConfig::default(),
            color_scheme: ColorScheme::default(),
        }
    }
}

impl ChartConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;
        let cfg = Self::from_yaml_str(&s)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(cfg)
    }
}

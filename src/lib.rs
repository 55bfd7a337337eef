//! censusplot crate root: re-exports and module wiring.
//!
//! An interactive scatter plot of census measures built on egui/eframe.
//! Clicking an axis title switches the plotted field and animates the
//! marks and ticks to their new positions.
//!
//! - `data`: fields, records, scales, selection, scene, tooltip, transitions
//! - `chart`: chart state and title-click dispatch
//! - `export`: SVG and PNG output
//! - `config`: YAML-loadable configuration
//! - `app`: the eframe front end

pub mod app;
pub mod chart;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod error;
pub mod export;

// Public re-exports for a compact external API
pub use app::{run_scatter, ScatterApp};
pub use chart::{Chart, ClickOutcome};
pub use color_scheme::{ChartColors, ColorScheme};
pub use config::ChartConfig;
pub use data::field::{Axis, Field, XField, YField};
pub use data::record::{Dataset, Record};
pub use data::selection::{LabelClick, Selection};
pub use data::transition::{TransitionConfig, TransitionPolicy};
pub use error::ChartError;

//! egui front end.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`scatter_app`] | [`ScatterApp`] (eframe) wrapper: toolbar, load errors, click feedback, repaint scheduling |
//! | `chart_ui`      | `egui_plot` chart area, clickable axis titles, hover tooltip |
//! | [`run`]         | Top-level [`run_scatter()`] entry point |

mod chart_ui;
pub mod run;
pub mod scatter_app;

pub use run::run_scatter;
pub use scatter_app::ScatterApp;

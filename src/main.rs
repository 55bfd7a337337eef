use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use tracing_subscriber::EnvFilter;

use censusplot::data::scene::Scene;
use censusplot::{export, run_scatter, ChartConfig, ColorScheme, Dataset, XField, YField};

/// Interactive scatter plot of US census measures.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// CSV dataset (overrides the config file)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    data: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Initial horizontal field: poverty, age or income
    #[arg(short = 'x', long)]
    x: Option<XField>,

    /// Initial vertical field: healthcare, smokes or obesity
    #[arg(short = 'y', long)]
    y: Option<YField>,

    /// Use the dark color scheme
    #[arg(long)]
    dark: bool,

    /// Write the chart to an .svg or .png file and exit instead of opening a window
    #[arg(long, value_hint = ValueHint::FilePath)]
    export: Option<PathBuf>,

    /// Pixel scale for PNG export
    #[arg(long, default_value_t = 2.0)]
    png_scale: f32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut cfg = match &cli.config {
        Some(path) => ChartConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(data) = cli.data {
        cfg.data_path = data;
    }
    if let Some(x) = cli.x {
        cfg.initial = cfg.initial.with_x(x);
    }
    if let Some(y) = cli.y {
        cfg.initial = cfg.initial.with_y(y);
    }
    if cli.dark {
        cfg.color_scheme = ColorScheme::Dark;
    }

    if let Some(out) = cli.export {
        let dataset = Dataset::load(&cfg.data_path)
            .with_context(|| format!("loading dataset {}", cfg.data_path.display()))?;
        let scene = Scene::build(&dataset, cfg.initial, &cfg.layout);
        let colors = cfg.color_scheme.colors();
        let is_png = out
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if is_png {
            export::save_png(&out, &scene, &cfg.layout, &colors, cli.png_scale)?;
        } else {
            export::save_svg(&out, &scene, &cfg.layout, &colors)?;
        }
        return Ok(());
    }

    run_scatter(cfg).map_err(|e| anyhow::anyhow!("window error: {e}"))
}

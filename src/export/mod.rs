//! Saving the chart as SVG or PNG.

pub mod svg;
pub mod ticks;

use std::path::Path;

use crate::color_scheme::ChartColors;
use crate::data::layout::ChartLayout;
use crate::data::scene::Scene;
use crate::error::{ChartError, Result};

/// Suggested file name, e.g. `census_scatter_20240115_120000.png`.
pub fn default_file_name(extension: &str) -> String {
    format!(
        "census_scatter_{}.{}",
        chrono::Local::now().format("%Y%m%d_%H%M%S"),
        extension
    )
}

pub fn save_svg<P: AsRef<Path>>(
    path: P,
    scene: &Scene,
    layout: &ChartLayout,
    colors: &ChartColors,
) -> Result<()> {
    let path = path.as_ref();
    let doc = svg::render(scene, layout, colors);
    std::fs::write(path, doc).map_err(|e| ChartError::io(path, e))?;
    tracing::info!(path = %path.display(), "saved SVG");
    Ok(())
}

/// Rasterize the chart at `scale` times its view size and write a PNG.
pub fn save_png<P: AsRef<Path>>(
    path: P,
    scene: &Scene,
    layout: &ChartLayout,
    colors: &ChartColors,
    scale: f32,
) -> Result<()> {
    let path = path.as_ref();
    let img = render_png(scene, layout, colors, scale)?;
    img.save(path)?;
    tracing::info!(path = %path.display(), width = img.width(), height = img.height(), "saved PNG");
    Ok(())
}

/// Rasterize the SVG rendering into an RGBA image.
pub fn render_png(
    scene: &Scene,
    layout: &ChartLayout,
    colors: &ChartColors,
    scale: f32,
) -> Result<image::RgbaImage> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(ChartError::Export(format!("invalid PNG scale {scale}")));
    }
    let doc = svg::render(scene, layout, colors);

    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(&doc, &opt).map_err(|e| ChartError::Export(e.to_string()))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ChartError::Export(format!("cannot allocate {width}x{height} pixmap")))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| ChartError::Export("pixel buffer size mismatch".to_string()))
}

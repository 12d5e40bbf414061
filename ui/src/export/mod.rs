//! Chart export: SVG → raster → PNG bytes.
//!
//! The adapter never writes files or talks to the network; it hands back the
//! encoded bytes and the filename. Delivery (download prompt or a file in the
//! user's data directory) lives in [`delivery`].

mod delivery;
mod view;

pub use delivery::download_bytes;
pub use view::ExportPanel;

use std::sync::Arc;

use once_cell::sync::Lazy;
use thiserror::Error;
use tiny_skia::{IntRect, Pixmap, Transform};
use tracing::{debug, info};

use crate::charts::{embedded_font_data, ChartFamily, ChartImage, SvgImage};
use crate::core::scenario::Scenario;

pub const PNG_MIME: &str = "image/png";

const METERS_PER_INCH: f64 = 0.0254;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unable to parse chart SVG: {0}")]
    Parse(#[from] usvg::Error),

    #[error("Unable to allocate a {width}×{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("Rendered chart is empty")]
    Blank,

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Raster settings. Chart canvases are laid out at 100 user units per inch.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub dpi: f64,
    pub units_per_inch: f64,
    /// Whitespace kept around the content after cropping.
    pub pad_inches: f64,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            dpi: 300.0,
            units_per_inch: 100.0,
            pad_inches: 0.1,
        }
    }
}

impl ExportSettings {
    pub fn scale(&self) -> f32 {
        (self.dpi / self.units_per_inch) as f32
    }

    pub fn pad_px(&self) -> u32 {
        (self.pad_inches * self.dpi).round().max(0.0) as u32
    }

    pub fn pixels_per_meter(&self) -> u32 {
        (self.dpi / METERS_PER_INCH).round() as u32
    }
}

/// An encoded image ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Rasterize and encode `image`, tagging the result with `filename`.
pub fn export(
    image: &SvgImage,
    filename: impl Into<String>,
    settings: &ExportSettings,
) -> Result<ExportArtifact, ExportError> {
    let filename = filename.into();
    let pixmap = crop_to_content(rasterize(image, settings)?, settings.pad_px())?;
    let bytes = encode_png(&pixmap, settings.pixels_per_meter())?;
    info!(
        %filename,
        bytes = bytes.len(),
        width = pixmap.width(),
        height = pixmap.height(),
        "chart exported"
    );

    Ok(ExportArtifact {
        filename,
        mime: PNG_MIME,
        bytes,
        width: pixmap.width(),
        height: pixmap.height(),
    })
}

/// Export one standalone chart under its fixed filename.
pub fn export_chart(
    chart: &ChartImage,
    settings: &ExportSettings,
) -> Result<ExportArtifact, ExportError> {
    export(&chart.image, chart.family.filename(), settings)
}

/// Export the chart as rendered for the scenario's current parameters.
pub fn export_current(
    scenario: &Scenario,
    family: ChartFamily,
    settings: &ExportSettings,
) -> Result<ExportArtifact, ExportError> {
    export_chart(scenario.snapshot().chart_image(family), settings)
}

/// System fonts are scanned once; parsing a chart reuses the database.
static FONT_DB: Lazy<Arc<usvg::fontdb::Database>> = Lazy::new(|| {
    let mut db = usvg::fontdb::Database::new();
    #[cfg(not(target_arch = "wasm32"))]
    db.load_system_fonts();
    if let Some(data) = embedded_font_data() {
        db.load_font_data(data.to_vec());
    }
    debug!(faces = db.len(), "font database loaded");
    Arc::new(db)
});

fn rasterize(image: &SvgImage, settings: &ExportSettings) -> Result<Pixmap, ExportError> {
    let mut options = usvg::Options::default();
    options.fontdb = FONT_DB.clone();
    let tree = usvg::Tree::from_str(&image.markup, &options)?;

    let scale = settings.scale();
    let width = (image.width as f32 * scale).ceil() as u32;
    let height = (image.height as f32 * scale).ceil() as u32;
    let mut pixmap = Pixmap::new(width, height).ok_or(ExportError::Canvas { width, height })?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Trim uniform background around the drawing, keeping `pad` pixels of margin.
fn crop_to_content(pixmap: Pixmap, pad: u32) -> Result<Pixmap, ExportError> {
    let background = pixmap.pixel(0, 0).ok_or(ExportError::Blank)?;
    let width = pixmap.width();

    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    for (idx, pixel) in pixmap.pixels().iter().enumerate() {
        if *pixel == background {
            continue;
        }
        let x = idx as u32 % width;
        let y = idx as u32 / width;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    if min_x > max_x || min_y > max_y {
        return Err(ExportError::Blank);
    }

    let left = min_x.saturating_sub(pad);
    let top = min_y.saturating_sub(pad);
    let right = (max_x + 1 + pad).min(pixmap.width());
    let bottom = (max_y + 1 + pad).min(pixmap.height());
    let rect = IntRect::from_ltrb(left as i32, top as i32, right as i32, bottom as i32)
        .ok_or(ExportError::Blank)?;

    pixmap.clone_rect(rect).ok_or(ExportError::Canvas {
        width: right - left,
        height: bottom - top,
    })
}

fn encode_png(pixmap: &Pixmap, pixels_per_meter: u32) -> Result<Vec<u8>, ExportError> {
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: pixels_per_meter,
            yppu: pixels_per_meter,
            unit: png::Unit::Meter,
        }));
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&rgba)?;
        writer.finish()?;
    }

    Ok(buffer)
}

//! Chart rendering and static image export

pub(crate) mod colors;
mod consumption;
mod emissions;
mod price;

pub(crate) use consumption::{LineRole, LineSeries, render_consumption_chart};
pub(crate) use emissions::{BarDatum, render_emissions_chart};
pub(crate) use price::{LabelSide, LabelledPoint, render_price_chart};

use charming::{Chart, ImageRenderer, renderer::ImageFormat};
use clap::ValueEnum;

/// Default image sizes (width, height) per chart
pub(crate) const EMISSIONS_SIZE: (u32, u32) = (800, 1000);
pub(crate) const CONSUMPTION_SIZE: (u32, u32) = (1000, 650);
pub(crate) const PRICE_SIZE: (u32, u32) = (1000, 650);

/// Image file format for exported charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    Png,
    Svg,
}

/// Where and how a chart is written; passed to every render call
#[derive(Debug, Clone)]
pub(crate) struct ExportConfig {
    pub(crate) path: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) format: ExportFormat,
}

/// Headline and explanatory line above a chart
pub(crate) struct Heading {
    pub(crate) title: String,
    pub(crate) subtitle: String,
}

/// Write `chart` according to `config`
fn export(chart: &Chart, config: &ExportConfig) -> Result<(), String> {
    let mut renderer = ImageRenderer::new(config.width, config.height);
    let result = match config.format {
        ExportFormat::Png => renderer.save_format(ImageFormat::Png, chart, &config.path),
        ExportFormat::Svg => renderer.save(chart, &config.path),
    };
    result.map_err(|e| format!("Failed to save chart: {}", e))
}

/// Round to 2 decimal places for display
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

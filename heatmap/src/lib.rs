//! A heat map of monthly global land-surface temperature.
//!
//! Loads the monthly variance dataset, lays it out as a grid of colored
//! cells (one column per year, one row per month) with axes and a legend,
//! and writes it as SVG, HTML or PNG.
//!
//! # Building
//! The `png` feature (default) draws through
//! [embedded-graphics-simulator](https://crates.io/crates/embedded-graphics-simulator)'s
//! display buffer. The `window` feature also needs SDL2, for the `preview` binary.
//!
pub mod axis;
pub mod chart;
pub mod dataset;
mod error;
pub mod legend;
pub mod render;
pub mod scale;
pub mod source;
pub mod tooltip;

pub use chart::{ChartSettings, HeatMap};
pub use dataset::{Dataset, MonthlyVariance};
pub use error::Error;
pub use render::{Format, OutputSettings};
pub use source::{DatasetSource, FakeSource, FileSource, HttpSource};

use std::path::Path;

/// Load, lay out, and write a heat map: the whole pipeline.
pub fn run(
    source: &mut impl DatasetSource,
    settings: &ChartSettings,
    format: Format,
    output: &OutputSettings,
    path: &Path,
) -> Result<HeatMap, Error> {
    let dataset = source.load()?;
    tracing::info!(
        "loaded {} monthly variances, base temperature {}",
        dataset.len(),
        dataset.base_temperature
    );
    let map = HeatMap::build(&dataset, settings)?;
    let (width, height) = map.size();
    tracing::info!("laid out {} cells on a {}x{} canvas", map.cells.len(), width, height);
    render::write(&map, format, output, path)?;
    Ok(map)
}

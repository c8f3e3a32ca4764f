//! Errors surfaced while loading data or drawing the map.

/// An error anywhere in the fetch / transform / draw pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not fetch dataset: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("month {month} of {year} is not in 1..=12")]
    InvalidMonth { year: i32, month: u32 },

    #[error("dataset has no monthly variance entries")]
    EmptyDataset,

    #[error("threshold scale with {thresholds} thresholds needs one more output, got {outputs}")]
    ScaleMismatch { thresholds: usize, outputs: usize },

    #[error("palette: {0}")]
    Palette(#[from] colorbrewer::Error),

    #[error("unknown output format {0:?}; expected svg, html or png")]
    UnknownFormat(String),

    #[error("could not write PNG: {0}")]
    Png(String),
}

//! Show the heat map in a window.
//!
//! Usage: preview [DATASET.json]; fetches the reference data if no file is given.

use std::time::Duration;

use embedded_graphics_simulator::{OutputSettingsBuilder, Window};
use heatmap::{
    render::png::to_display, source::DEFAULT_URL, ChartSettings, DatasetSource, FileSource,
    HeatMap, HttpSource,
};

fn main() {
    tracing_subscriber::fmt::init();

    let dataset = match std::env::args_os().nth(1) {
        Some(path) => FileSource::new(path).load(),
        None => HttpSource::new(DEFAULT_URL, Duration::from_secs(30)).and_then(|mut s| s.load()),
    }
    .expect("could not load dataset");

    let map = HeatMap::build(&dataset, &ChartSettings::default()).expect("could not lay out map");
    let display = to_display(&map);

    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    Window::new("Monthly Global Land-Surface Temperature", &output_settings).show_static(&display);
}

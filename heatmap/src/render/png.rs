//! PNG output, drawn through the simulator's display buffer.

use std::path::Path;

use embedded_graphics::{pixelcolor::Rgb888, prelude::Size};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};

use super::raster;
use crate::{chart::HeatMap, Error};

/// Draw the map into a display buffer sized to fit it.
pub fn to_display(map: &HeatMap) -> SimulatorDisplay<Rgb888> {
    let (width, height) = map.size();
    let mut display = SimulatorDisplay::new(Size::new(width.ceil() as u32, height.ceil() as u32));
    raster::draw(map, &mut display).expect("infallible");
    display
}

/// Write the map to `path` as a PNG, each map pixel `scale` pixels wide.
pub fn save(map: &HeatMap, scale: u32, path: &Path) -> Result<(), Error> {
    let display = to_display(map);
    let settings = OutputSettingsBuilder::new().scale(scale.max(1)).build();
    display
        .to_rgb_output_image(&settings)
        .save_png(path)
        .map_err(|e| Error::Png(e.to_string()))
}

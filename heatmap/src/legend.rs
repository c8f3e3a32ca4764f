//! The color legend: which temperatures map to which colors.

use colorbrewer::Color;

use crate::{
    axis::{decimal_label, Axis, Orient},
    scale::{LinearScale, ThresholdScale},
    Error,
};

/// `count - 1` evenly spaced thresholds splitting `[min, max]` into `count` classes.
pub fn thresholds(min: f64, max: f64, count: usize) -> Vec<f64> {
    let step = (max - min) / count as f64;
    (1..count).map(|i| min + i as f64 * step).collect()
}

/// One color band of the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendBand {
    /// Temperatures covered by this band.
    pub extent: (f64, f64),
    pub x: f64,
    pub width: f64,
    pub color: Color,
}

/// The legend, in its own coordinates: bands along the top, axis below them.
#[derive(Debug, Clone)]
pub struct Legend {
    pub bands: Vec<LegendBand>,
    pub band_height: f64,
    pub axis: Axis,
    /// Maps temperatures to cell colors.
    pub color_scale: ThresholdScale<Color>,
}

impl Legend {
    /// Lay out a legend for `colors` over the temperature range `[min, max]`.
    /// `colors` go from coldest to hottest.
    pub fn new(
        colors: Vec<Color>,
        (min, max): (f64, f64),
        width: f64,
        height: f64,
        tick_size: f64,
    ) -> Result<Self, Error> {
        let band_height = height / colors.len() as f64;
        let color_scale = ThresholdScale::new(thresholds(min, max, colors.len()), colors)?;
        let x = LinearScale::new((min, max), (0.0, width));

        let bands = (0..color_scale.outputs().len())
            .map(|i| {
                let (lo, hi) = color_scale.invert_extent(i);
                let (lo, hi) = (lo.unwrap_or(min), hi.unwrap_or(max));
                LegendBand {
                    extent: (lo, hi),
                    x: x.apply(lo),
                    width: x.apply(hi) - x.apply(lo),
                    color: *color_scale.apply(lo),
                }
            })
            .collect();
        let axis = Axis::linear(
            Orient::Bottom,
            &x,
            color_scale.thresholds().iter().copied(),
            decimal_label,
        )
        .with_tick_size(tick_size, 0.0);

        Ok(Legend {
            bands,
            band_height,
            axis,
            color_scale,
        })
    }

    /// Color for the given temperature.
    pub fn color(&self, temperature: f64) -> Color {
        *self.color_scale.apply(temperature)
    }
}

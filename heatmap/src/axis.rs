//! Axes: tick placement and labels.

use std::hash::Hash;

use chrono::Month;

use crate::scale::{BandScale, LinearScale};

/// Which side of the plot an axis sits on.
/// Ticks point away from the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    Left,
    Bottom,
}

/// A labeled tick mark, positioned along the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// An axis, in coordinates local to wherever it is placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    /// Extent of the axis line.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
    /// Length of each tick mark.
    pub inner_tick_size: f64,
    /// Length of the marks capping either end of the axis line.
    pub outer_tick_size: f64,
}

impl Axis {
    /// Axis over a band scale, with ticks at the centers of the given bands.
    /// Values not in the scale's domain are skipped.
    pub fn band<T>(
        orient: Orient,
        scale: &BandScale<T>,
        values: impl IntoIterator<Item = T>,
        format: impl Fn(&T) -> String,
    ) -> Self
    where
        T: Clone + Eq + Hash,
    {
        let half = scale.bandwidth() / 2.0;
        let ticks = values
            .into_iter()
            .filter_map(|v| {
                scale.position(&v).map(|p| Tick {
                    position: p + half,
                    label: format(&v),
                })
            })
            .collect();
        Axis {
            orient,
            range: scale.range(),
            ticks,
            inner_tick_size: 0.0,
            outer_tick_size: 0.0,
        }
    }

    /// Axis over a linear scale, with ticks at the given values.
    pub fn linear(
        orient: Orient,
        scale: &LinearScale,
        values: impl IntoIterator<Item = f64>,
        format: impl Fn(f64) -> String,
    ) -> Self {
        let ticks = values
            .into_iter()
            .map(|v| Tick {
                position: scale.apply(v),
                label: format(v),
            })
            .collect();
        Axis {
            orient,
            range: scale.range,
            ticks,
            inner_tick_size: 0.0,
            outer_tick_size: 0.0,
        }
    }

    /// Set the inner and outer tick sizes.
    pub fn with_tick_size(self, inner: f64, outer: f64) -> Self {
        Axis {
            inner_tick_size: inner,
            outer_tick_size: outer,
            ..self
        }
    }
}

/// Full English name for a zero-based month index.
pub fn month_label(index: &usize) -> String {
    u8::try_from(*index + 1)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_owned())
        .unwrap_or_else(|| index.to_string())
}

/// Four-digit year.
pub fn year_label(year: &i32) -> String {
    format!("{year:04}")
}

/// One decimal place.
pub fn decimal_label(v: f64) -> String {
    format!("{v:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_axis() {
        let scale = BandScale::new(0..12, (0.0, 396.0));
        let axis = Axis::band(Orient::Left, &scale, 0..12, month_label).with_tick_size(10.0, 1.0);
        assert_eq!(axis.ticks.len(), 12);
        assert_eq!(axis.ticks[0].label, "January");
        assert_eq!(axis.ticks[0].position, 16.5);
        assert_eq!(axis.ticks[11].label, "December");
        assert_eq!(axis.range, (0.0, 396.0));
        assert_eq!(axis.inner_tick_size, 10.0);
        assert_eq!(axis.outer_tick_size, 1.0);
    }

    #[test]
    fn year_axis_every_twenty() {
        let years: Vec<i32> = (1753..=2015).collect();
        let scale = BandScale::new(years.iter().copied(), (0.0, 5.0 * years.len() as f64));
        let axis = Axis::band(
            Orient::Bottom,
            &scale,
            years.iter().copied().filter(|y| y % 20 == 0),
            year_label,
        );
        let labels: Vec<&str> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels.first(), Some(&"1760"));
        assert_eq!(labels.last(), Some(&"2000"));
        assert_eq!(labels.len(), 13);
        // 1760 is the 8th year; its band starts at 35.
        assert_eq!(axis.ticks[0].position, 37.5);
    }

    #[test]
    fn band_axis_spans_whole_range() {
        // Two years in three columns: bands are 7 wide and start at 1,
        // but the axis line still covers the full plot width.
        let scale = BandScale::new([1753, 1760], (0.0, 15.0));
        assert_eq!(scale.position(&1753), Some(1.0));
        let axis = Axis::band(Orient::Bottom, &scale, [1760], year_label);
        assert_eq!(axis.range, (0.0, 15.0));
        assert_eq!(axis.ticks[0].position, 11.5);
    }

    #[test]
    fn linear_axis() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 400.0));
        let axis = Axis::linear(Orient::Bottom, &scale, [2.5, 5.0], decimal_label);
        assert_eq!(axis.ticks[0].position, 100.0);
        assert_eq!(axis.ticks[0].label, "2.5");
        assert_eq!(axis.ticks[1].label, "5.0");
        assert_eq!(axis.range, (0.0, 400.0));
    }

    #[test]
    fn labels() {
        assert_eq!(month_label(&4), "May");
        assert_eq!(month_label(&12), "12");
        assert_eq!(year_label(&812), "0812");
        assert_eq!(decimal_label(-0.04), "-0.0");
        assert_eq!(decimal_label(3.96), "4.0");
    }
}

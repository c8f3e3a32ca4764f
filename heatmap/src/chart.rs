//! Layout of the whole heat map: cells, axes, legend.
//!
//! Everything here is in pixels, in the coordinates of the full canvas
//! unless a field says otherwise. Renderers only place what is computed here.

use chrono::Month;
use colorbrewer::{Color, Scheme};

use crate::{
    axis::{month_label, year_label, Axis, Orient},
    dataset::{Dataset, MONTHS},
    legend::Legend,
    scale::BandScale,
    tooltip::Tooltip,
    Error,
};

pub const TITLE: &str = "Monthly Global Land-Surface Temperature";

/// Knobs for the layout.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct ChartSettings {
    /// Base unit for padding around the plot.
    pub font_size: u32,
    /// Width of one year-column.
    pub cell_width: u32,
    /// Height of one month-row.
    pub cell_height: u32,
    /// Label every year divisible by this; the sign is ignored.
    pub year_tick_every: i32,
    pub legend_width: f64,
    /// Total height shared among the legend's bands.
    pub legend_height: f64,
    pub scheme: Scheme,
    /// Number of color classes, within [Scheme::CLASSES].
    pub classes: usize,
    pub tick_size: f64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            font_size: 16,
            cell_width: 5,
            cell_height: 33,
            year_tick_every: 20,
            legend_width: 400.0,
            legend_height: 300.0,
            scheme: Scheme::RdYlBu,
            classes: 11,
            tick_size: 10.0,
        }
    }
}

/// Space around the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl ChartSettings {
    pub fn padding(&self) -> Padding {
        let f = self.font_size as f64;
        Padding {
            left: 9.0 * f,
            right: 9.0 * f,
            top: f,
            bottom: 8.0 * f,
        }
    }
}

/// A single colored rectangle of the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub year: i32,
    pub month: Month,
    pub temperature: f64,
    pub color: Color,
    pub tooltip: Tooltip,
}

impl Cell {
    /// Zero-based month, 0 is January.
    pub fn month_index(&self) -> usize {
        self.month.number_from_month() as usize - 1
    }
}

/// A fully laid-out heat map.
#[derive(Debug, Clone)]
pub struct HeatMap {
    pub title: String,
    pub description: String,
    pub padding: Padding,
    /// Size of the plot area, without padding.
    pub plot_size: (f64, f64),
    /// Cells, in plot-area coordinates.
    pub cells: Vec<Cell>,
    /// Placed at the plot's bottom-left corner.
    pub x_axis: Axis,
    /// Placed at the plot's top-left corner.
    pub y_axis: Axis,
    pub legend: Legend,
    /// Top-left corner of the legend.
    pub legend_origin: (f64, f64),
}

impl HeatMap {
    /// Lay out the given data.
    pub fn build(dataset: &Dataset, settings: &ChartSettings) -> Result<Self, Error> {
        if dataset.is_empty() {
            return Err(Error::EmptyDataset);
        }
        let width = (settings.cell_width as usize * dataset.columns()) as f64;
        let height = (settings.cell_height as usize * MONTHS) as f64;
        let padding = settings.padding();
        tracing::debug!(
            "plot area {}x{}, {} cells",
            width,
            height,
            dataset.len()
        );

        let years = dataset.years();
        let x = BandScale::new(years.iter().copied(), (0.0, width));
        let y = BandScale::new(0..MONTHS, (0.0, height));

        // A label spacing only has a magnitude.
        let every = settings.year_tick_every.abs().max(1);
        let x_axis = Axis::band(
            Orient::Bottom,
            &x,
            years.iter().copied().filter(|year| year % every == 0),
            year_label,
        )
        .with_tick_size(settings.tick_size, 1.0);
        let y_axis = Axis::band(Orient::Left, &y, 0..MONTHS, month_label)
            .with_tick_size(settings.tick_size, 1.0);

        let colors = settings
            .scheme
            .palette(settings.classes)?
            .reversed()
            .into();
        let range = dataset.temperature_range();
        let legend = Legend::new(
            colors,
            range,
            settings.legend_width,
            settings.legend_height,
            settings.tick_size,
        )?;
        let legend_origin = (
            padding.left,
            padding.top + height + padding.bottom - 2.0 * legend.band_height,
        );

        let cells = dataset
            .monthly_variance
            .iter()
            .filter_map(|point| {
                let month = point.month_index();
                let (cx, cy) = (x.position(&point.year)?, y.position(&month)?);
                let temperature = dataset.temperature(point);
                Some(Cell {
                    x: cx,
                    y: cy,
                    width: x.bandwidth(),
                    height: y.bandwidth(),
                    year: point.year,
                    month: point.month,
                    temperature,
                    color: legend.color(temperature),
                    tooltip: Tooltip {
                        year: point.year,
                        month: point.month,
                        temperature,
                        variance: point.variance,
                    },
                })
            })
            .collect();

        let description = match (years.first(), years.last()) {
            (Some(first), Some(last)) => format!(
                "{first} - {last}: base temperature {}\u{2103}",
                dataset.base_temperature
            ),
            _ => String::new(),
        };

        Ok(HeatMap {
            title: TITLE.to_owned(),
            description,
            padding,
            plot_size: (width, height),
            cells,
            x_axis,
            y_axis,
            legend,
            legend_origin,
        })
    }

    /// Size of the whole canvas, padding included.
    pub fn size(&self) -> (f64, f64) {
        let (w, h) = self.plot_size;
        (
            w + self.padding.left + self.padding.right,
            h + self.padding.top + self.padding.bottom,
        )
    }

    /// Top-left corner of the plot area.
    pub fn plot_origin(&self) -> (f64, f64) {
        (self.padding.left, self.padding.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::sample;

    fn map() -> HeatMap {
        HeatMap::build(&sample(), &ChartSettings::default()).expect("sample should lay out")
    }

    #[test]
    fn canvas_size() {
        let m = map();
        // Three columns of 5px, twelve rows of 33px.
        assert_eq!(m.plot_size, (15.0, 396.0));
        assert_eq!(m.size(), (15.0 + 288.0, 396.0 + 16.0 + 128.0));
        assert_eq!(m.plot_origin(), (144.0, 16.0));
    }

    #[test]
    fn cells_in_bands() {
        let m = map();
        assert_eq!(m.cells.len(), 25);
        let first = &m.cells[0];
        assert_eq!((first.x, first.y, first.width, first.height), (0.0, 0.0, 5.0, 33.0));
        let dec_1754 = &m.cells[23];
        assert_eq!(dec_1754.month_index(), 11);
        assert_eq!((dec_1754.x, dec_1754.y), (5.0, 363.0));
        let last = &m.cells[24];
        assert_eq!((last.year, last.x), (1760, 10.0));
    }

    #[test]
    fn extremes_get_end_colors() {
        let m = map();
        // February 1753 is coldest, December 1754 hottest.
        assert_eq!(m.cells[1].color.hex(), "#313695");
        assert_eq!(m.cells[23].color.hex(), "#a50026");
        assert!((m.cells[23].temperature - 10.66).abs() < 1e-9);
    }

    #[test]
    fn axes() {
        let m = map();
        assert_eq!(m.y_axis.ticks.len(), 12);
        let years: Vec<&str> = m.x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(years, vec!["1760"]);
        assert_eq!(m.x_axis.ticks[0].position, 12.5);
    }

    #[test]
    fn legend_sits_at_bottom() {
        let m = map();
        let band = 300.0 / 11.0;
        assert_eq!(m.legend_origin.0, 144.0);
        assert!((m.legend_origin.1 - (16.0 + 396.0 + 128.0 - 2.0 * band)).abs() < 1e-9);
    }

    #[test]
    fn title_and_description() {
        let m = map();
        assert_eq!(m.title, TITLE);
        assert_eq!(m.description, "1753 - 1760: base temperature 8.66\u{2103}");
    }

    #[test]
    fn description_uses_first_and_last_year() {
        let d = sample();
        let mut points = d.monthly_variance.clone();
        points.rotate_left(24);
        let d = Dataset::new(d.base_temperature, points).unwrap();
        assert_eq!(d.years(), vec![1760, 1753, 1754]);
        let m = HeatMap::build(&d, &ChartSettings::default()).unwrap();
        assert_eq!(m.description, "1760 - 1754: base temperature 8.66\u{2103}");
    }

    #[test]
    fn negative_year_spacing_is_magnitude() {
        let settings = ChartSettings {
            year_tick_every: -20,
            ..Default::default()
        };
        let m = HeatMap::build(&sample(), &settings).unwrap();
        let years: Vec<&str> = m.x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(years, vec!["1760"]);

        let settings = ChartSettings {
            year_tick_every: 0,
            ..Default::default()
        };
        let m = HeatMap::build(&sample(), &settings).unwrap();
        assert_eq!(m.x_axis.ticks.len(), 3);
    }

    #[test]
    fn bad_class_count() {
        let settings = ChartSettings {
            classes: 2,
            ..Default::default()
        };
        let err = HeatMap::build(&sample(), &settings).expect_err("two classes");
        assert!(matches!(err, Error::Palette(_)));
    }
}

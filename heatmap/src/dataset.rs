//! Monthly temperature variance data.
//!
//! The wire format is the one published with the
//! [global temperature reference data](https://github.com/FreeCodeCamp/ProjectReferenceData):
//!
//! ```json
//! {
//!   "baseTemperature": 8.66,
//!   "monthlyVariance": [
//!     { "year": 1753, "month": 1, "variance": -1.366 },
//!     ...
//!   ]
//! }
//! ```
//!
//! Months arrive 1-based; they are kept as [`chrono::Month`].

use std::{collections::HashSet, io::Read};

use chrono::Month;
use serde::Deserialize;

use crate::Error;

/// Months in a year; also the number of rows in the map.
pub const MONTHS: usize = 12;

/// One month's deviation from the base temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyVariance {
    pub year: i32,
    pub month: Month,
    /// Degrees Celsius above (or below) the base temperature.
    pub variance: f64,
}

impl MonthlyVariance {
    /// Zero-based month: 0 is January, 11 is December.
    pub fn month_index(&self) -> usize {
        self.month.number_from_month() as usize - 1
    }
}

/// A base temperature and the monthly variances from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Degrees Celsius.
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyVariance>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    base_temperature: f64,
    monthly_variance: Vec<RawVariance>,
}

#[derive(Deserialize)]
struct RawVariance {
    year: i32,
    month: u32,
    variance: f64,
}

impl TryFrom<RawVariance> for MonthlyVariance {
    type Error = Error;

    fn try_from(raw: RawVariance) -> Result<Self, Self::Error> {
        let month = u8::try_from(raw.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or(Error::InvalidMonth {
                year: raw.year,
                month: raw.month,
            })?;
        Ok(MonthlyVariance {
            year: raw.year,
            month,
            variance: raw.variance,
        })
    }
}

impl Dataset {
    /// Create a dataset from already-normalized points.
    pub fn new(base_temperature: f64, monthly_variance: Vec<MonthlyVariance>) -> Result<Self, Error> {
        if monthly_variance.is_empty() {
            return Err(Error::EmptyDataset);
        }
        Ok(Dataset {
            base_temperature,
            monthly_variance,
        })
    }

    /// Parse a dataset from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Self::from_raw(serde_json::from_str(json)?)
    }

    /// Parse a dataset from a stream of JSON.
    pub fn from_reader(reader: impl Read) -> Result<Self, Error> {
        Self::from_raw(serde_json::from_reader(reader)?)
    }

    fn from_raw(raw: RawDataset) -> Result<Self, Error> {
        let points = raw
            .monthly_variance
            .into_iter()
            .map(MonthlyVariance::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            "parsed {} monthly variances around {}",
            points.len(),
            raw.base_temperature
        );
        Self::new(raw.base_temperature, points)
    }

    /// Absolute temperature of the given point.
    pub fn temperature(&self, point: &MonthlyVariance) -> f64 {
        self.base_temperature + point.variance
    }

    /// Lowest and highest absolute temperature in the dataset.
    pub fn temperature_range(&self) -> (f64, f64) {
        let (lo, hi) = self
            .monthly_variance
            .iter()
            .map(|p| p.variance)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        (self.base_temperature + lo, self.base_temperature + hi)
    }

    /// Distinct years, in the order they first appear.
    pub fn years(&self) -> Vec<i32> {
        let mut seen = HashSet::new();
        self.monthly_variance
            .iter()
            .map(|p| p.year)
            .filter(|y| seen.insert(*y))
            .collect()
    }

    /// Number of year-columns the map needs: one per twelve points, rounding up.
    pub fn columns(&self) -> usize {
        self.monthly_variance.len().div_ceil(MONTHS)
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }
}

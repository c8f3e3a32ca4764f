//! Scales: mappings from data values to positions and colors.

use std::{collections::HashMap, hash::Hash};

use crate::Error;

/// Ordinal scale over evenly-sized, pixel-aligned bands.
///
/// Bands have no padding between them or at the ends;
/// any leftover space from rounding is split evenly before and after.
#[derive(Debug, Clone)]
pub struct BandScale<T> {
    domain: Vec<T>,
    index: HashMap<T, usize>,
    range: (f64, f64),
    start: f64,
    step: f64,
}

impl<T> BandScale<T>
where
    T: Clone + Eq + Hash,
{
    /// Create a scale mapping the domain onto `range`.
    /// Repeated domain values keep their first position.
    pub fn new(domain: impl IntoIterator<Item = T>, range: (f64, f64)) -> Self {
        let mut index = HashMap::new();
        let mut values = Vec::new();
        for v in domain {
            if !index.contains_key(&v) {
                index.insert(v.clone(), values.len());
                values.push(v);
            }
        }

        let (start, stop) = range;
        let n = values.len() as f64;
        let (start, step) = if values.is_empty() {
            (start, 0.0)
        } else {
            let step = ((stop - start) / n).floor();
            let leftover = stop - start - n * step;
            (start + (leftover / 2.0).round(), step)
        };
        BandScale {
            domain: values,
            index,
            range,
            start,
            step,
        }
    }

    /// Start of the band for `v`, if it is in the domain.
    pub fn position(&self, v: &T) -> Option<f64> {
        self.index
            .get(v)
            .map(|&i| self.start + self.step * i as f64)
    }

    /// Width of every band.
    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    /// The full extent the bands were fitted into.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Continuous mapping from one interval onto another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    pub fn apply(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            // Degenerate: everything lands at the start.
            return r0;
        }
        r0 + (x - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Maps continuous values onto discrete outputs by comparing against thresholds.
///
/// Values below the first threshold map to the first output;
/// a value equal to a threshold maps to the output above it.
#[derive(Debug, Clone)]
pub struct ThresholdScale<R> {
    domain: Vec<f64>,
    range: Vec<R>,
}

impl<R> ThresholdScale<R> {
    /// `domain` must be ascending; `range` must be one longer than `domain`.
    pub fn new(domain: Vec<f64>, range: Vec<R>) -> Result<Self, Error> {
        if range.len() != domain.len() + 1 {
            return Err(Error::ScaleMismatch {
                thresholds: domain.len(),
                outputs: range.len(),
            });
        }
        Ok(ThresholdScale { domain, range })
    }

    /// Index into the range for the given value.
    pub fn bucket(&self, x: f64) -> usize {
        self.domain.partition_point(|t| *t <= x)
    }

    pub fn apply(&self, x: f64) -> &R {
        &self.range[self.bucket(x)]
    }

    /// The values that map to the `i`th output, as `[lo, hi)`.
    /// The first output has no lower bound and the last no upper bound.
    pub fn invert_extent(&self, i: usize) -> (Option<f64>, Option<f64>) {
        let lo = i.checked_sub(1).and_then(|j| self.domain.get(j)).copied();
        let hi = self.domain.get(i).copied();
        (lo, hi)
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.domain
    }

    pub fn outputs(&self) -> &[R] {
        &self.range
    }
}

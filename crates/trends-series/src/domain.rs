// File: crates/trends-series/src/domain.rs
// Summary: Axis extents over a normalized point set.

use chrono::NaiveDate;

use crate::error::{Result, SeriesError};
use crate::point::Point;

/// Closed month and volume extents of a non-empty point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub months: (NaiveDate, NaiveDate),
    pub volumes: (f64, f64),
}

impl Domain {
    pub fn from_points(points: &[Point]) -> Result<Self> {
        let first = points.first().ok_or(SeriesError::EmptyDataset)?;
        let init = Self { months: (first.month, first.month), volumes: (first.volume, first.volume) };
        Ok(points.iter().skip(1).fold(init, |d, p| Self {
            months: (d.months.0.min(p.month), d.months.1.max(p.month)),
            volumes: (d.volumes.0.min(p.volume), d.volumes.1.max(p.volume)),
        }))
    }
}

// File: crates/trends-chart/src/series.rs
// Summary: One drawable line segment: its role and (day, value) points.

use trends_series::{Point, Segment};

use crate::axis::day_number;

#[derive(Clone, Debug)]
pub struct Series {
    pub segment: Segment,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn with_data(segment: Segment, data: Vec<(f64, f64)>) -> Self {
        Self { segment, data_xy: data }
    }

    pub fn from_points(segment: Segment, points: &[Point]) -> Self {
        let data = points.iter().map(|p| (day_number(p.month), p.volume)).collect();
        Self::with_data(segment, data)
    }

    /// A line needs at least two points.
    pub fn is_drawable(&self) -> bool {
        self.data_xy.len() >= 2
    }
}

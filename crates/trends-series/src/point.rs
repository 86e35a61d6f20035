// File: crates/trends-series/src/point.rs
// Summary: Normalized point and the four plotted segments.

use chrono::NaiveDate;

/// One normalized CSV row.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    /// First day of the calendar month.
    pub month: NaiveDate,
    /// Volume in the chart's scale unit.
    pub volume: f64,
    pub seasonal: bool,
    /// Raw `group` value, when the file has one.
    pub group: Option<String>,
}

/// Identifies one of the four line segments of a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub adjusted: bool,
    pub projected: bool,
}

impl Segment {
    pub const HISTORICAL_UNADJUSTED: Segment = Segment { adjusted: false, projected: false };
    pub const PROJECTED_UNADJUSTED: Segment = Segment { adjusted: false, projected: true };
    pub const HISTORICAL_ADJUSTED: Segment = Segment { adjusted: true, projected: false };
    pub const PROJECTED_ADJUSTED: Segment = Segment { adjusted: true, projected: true };

    /// Draw order: unadjusted below adjusted, projected after historical.
    pub const ALL: [Segment; 4] = [
        Self::HISTORICAL_UNADJUSTED,
        Self::PROJECTED_UNADJUSTED,
        Self::HISTORICAL_ADJUSTED,
        Self::PROJECTED_ADJUSTED,
    ];

    /// Stable segment identifier (`line line__adjusted ...`), used to label segments in logs.
    pub const fn class_name(self) -> &'static str {
        match (self.adjusted, self.projected) {
            (false, false) => "line line__unadjusted",
            (false, true) => "line line__unadjusted line__projected",
            (true, false) => "line line__adjusted",
            (true, true) => "line line__adjusted line__projected",
        }
    }
}

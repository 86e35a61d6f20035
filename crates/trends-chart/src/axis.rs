// File: crates/trends-chart/src/axis.rs
// Summary: Axis model: label, range and how ticks are placed and formatted.

use chrono::{Datelike, NaiveDate};

use crate::grid::{format_value, month_ticks, value_ticks};
use crate::scale::widened;

#[derive(Clone, Debug, PartialEq)]
pub enum AxisKind {
    /// Range is in days since CE; ticks fall on month starts.
    Time,
    /// Linear values; tick labels carry `suffix` (e.g. "B").
    Value { suffix: String },
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: AxisKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64, kind: AxisKind) -> Self {
        Self { label: label.into(), min, max, kind }
    }

    pub fn time(first: NaiveDate, last: NaiveDate) -> Self {
        Self::new("", day_number(first), day_number(last), AxisKind::Time)
    }

    pub fn value(label: impl Into<String>, min: f64, max: f64, suffix: impl Into<String>) -> Self {
        Self::new(label, min, max, AxisKind::Value { suffix: suffix.into() })
    }

    /// Tick positions (axis units) with their labels.
    pub fn ticks(&self, target: usize) -> Vec<(f64, String)> {
        match &self.kind {
            AxisKind::Time => {
                let (Some(first), Some(last)) = (from_day_number(self.min), from_day_number(self.max)) else {
                    return Vec::new();
                };
                month_ticks(first, last, target)
                    .into_iter()
                    .map(|m| (day_number(m), trends_series::month::short_label(m)))
                    .collect()
            }
            AxisKind::Value { suffix } => {
                // same range the value scale maps, so flat domains still get ticks
                let (lo, hi) = widened(self.min, self.max);
                let ticks = value_ticks(lo, hi, target);
                let step = if ticks.len() > 1 { ticks[1] - ticks[0] } else { 1.0 };
                ticks
                    .into_iter()
                    .map(|v| (v, format!("{}{}", format_value(v, step), suffix)))
                    .collect()
            }
        }
    }
}

/// X coordinate of a calendar day.
pub fn day_number(day: NaiveDate) -> f64 {
    f64::from(day.num_days_from_ce())
}

pub fn from_day_number(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() || x.abs() > f64::from(i32::MAX) {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

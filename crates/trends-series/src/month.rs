// File: crates/trends-series/src/month.rs
// Summary: Month index <-> calendar month conversions ("January 2000" labels, month offsets).

use chrono::{Months, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Maps an integer month index to a human "Month Year" label.
pub trait MonthFormatter {
    /// Label for `index`, or `None` when the index has no calendar month.
    fn label(&self, index: i64) -> Option<String>;
}

/// Month indices counted from January of `base_year` (index 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpochMonths {
    pub base_year: i32,
}

impl EpochMonths {
    pub const fn new(base_year: i32) -> Self {
        Self { base_year }
    }
}

impl Default for EpochMonths {
    fn default() -> Self {
        Self::new(2000)
    }
}

impl MonthFormatter for EpochMonths {
    fn label(&self, index: i64) -> Option<String> {
        let year = i64::from(self.base_year).checked_add(index.div_euclid(12))?;
        let year = i32::try_from(year).ok()?;
        let month = index.rem_euclid(12) as usize;
        // reject years chrono cannot represent
        NaiveDate::from_ymd_opt(year, month as u32 + 1, 1)?;
        Some(format!("{} {}", MONTH_NAMES[month], year))
    }
}

/// Parse a "January 2000" label into the first day of that month.
pub fn parse_label(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("01 {}", label.trim()), "%d %B %Y").ok()
}

/// Axis tick format, e.g. "Jan 2000".
pub fn short_label(month: NaiveDate) -> String {
    month.format("%b %Y").to_string()
}

/// Shift `month` by `delta` calendar months.
pub fn offset_months(month: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let step = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        month.checked_add_months(step)
    } else {
        month.checked_sub_months(step)
    }
}

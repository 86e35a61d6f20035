// File: crates/trends-chart/src/grid.rs
// Summary: Tick layout helpers ("nice" value steps, month steps, label precision).

use chrono::{Datelike, NaiveDate};

/// Step of roughly `(max - min) / count`, snapped to 1, 2 or 5 × 10^k.
pub fn nice_step(min: f64, max: f64, count: usize) -> f64 {
    let span = (max - min).abs();
    if span < 1e-12 || count == 0 { return 1.0; }
    let raw = span / count as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let snapped = if norm >= 7.5 { 10.0 } else if norm >= 3.5 { 5.0 } else if norm >= 1.5 { 2.0 } else { 1.0 };
    snapped * mag
}

/// Multiples of the nice step within [min, max].
pub fn value_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = nice_step(lo, hi, count);
    let start = (lo / step).ceil() as i64;
    let end = (hi / step).floor() as i64;
    (start..=end).map(|i| i as f64 * step).collect()
}

/// Fraction digits needed to tell ticks `step` apart.
pub fn format_value(v: f64, step: f64) -> String {
    let digits = if step >= 1.0 { 0 } else { (-step.log10()).ceil().max(0.0) as usize };
    let v = if v.abs() < step * 1e-9 { 0.0 } else { v };
    format!("{v:.digits$}")
}

/// Calendar steps (in months) tried by `month_ticks`.
const MONTH_STEPS: [u32; 8] = [1, 2, 3, 6, 12, 24, 60, 120];

/// Month starts in [first, last] aligned to the smallest step giving at
/// most `target` ticks.
pub fn month_ticks(first: NaiveDate, last: NaiveDate, target: usize) -> Vec<NaiveDate> {
    let index = |d: NaiveDate| i64::from(d.year()) * 12 + i64::from(d.month0());
    let (lo, hi) = (index(first.min(last)), index(first.max(last)));
    let target = target.max(1) as i64;
    let step = MONTH_STEPS
        .iter()
        .map(|&s| i64::from(s))
        .find(|&s| (hi - lo) / s + 1 <= target)
        .unwrap_or(i64::from(MONTH_STEPS[MONTH_STEPS.len() - 1]));

    let start = lo + (step - lo.rem_euclid(step)) % step;
    (start..=hi)
        .step_by(step as usize)
        .filter_map(|i| {
            let year = i32::try_from(i.div_euclid(12)).ok()?;
            NaiveDate::from_ymd_opt(year, i.rem_euclid(12) as u32 + 1, 1)
        })
        .filter(|d| *d >= first.min(last))
        .collect()
}

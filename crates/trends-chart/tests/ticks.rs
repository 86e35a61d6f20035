// File: crates/trends-chart/tests/ticks.rs
// Purpose: Tick placement and labels for time and value axes.

use chrono::NaiveDate;
use trends_chart::grid::{format_value, month_ticks, nice_step, value_ticks};
use trends_chart::scale::{TimeScale, ValueScale};
use trends_chart::Axis;

fn ym(y: i32, m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, 1).unwrap()
}

#[test]
fn nice_steps_snap_to_1_2_5() {
    assert_eq!(nice_step(0.0, 10.0, 5), 2.0);
    assert_eq!(nice_step(0.0, 100.0, 4), 20.0);
    assert!((nice_step(0.0, 0.7, 7) - 0.1).abs() < 1e-12);
    assert_eq!(value_ticks(0.5, 9.5, 5), vec![2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn value_labels_carry_suffix() {
    let axis = Axis::value("Loan volume", 30.0, 50.0, "B");
    let labels = axis.ticks(4).into_iter().map(|(_, l)| l).collect::<Vec<_>>();
    assert_eq!(labels, vec!["30B", "35B", "40B", "45B", "50B"]);
    assert_eq!(format_value(0.25, 0.05), "0.25");
}

#[test]
fn flat_value_domain_still_gets_ticks() {
    let axis = Axis::value("Loan volume", 1.5, 1.5, "B");
    let labels = axis.ticks(6).into_iter().map(|(_, l)| l).collect::<Vec<_>>();
    assert_eq!(labels, vec!["1.6B", "1.8B", "2.0B", "2.2B", "2.4B"]);

    let ys = ValueScale::new_linear(100.0, 380.0, 1.5, 1.5);
    for (y, _) in axis.ticks(6) {
        let py = ys.to_px(y);
        assert!((100.0..=380.0).contains(&py), "tick {y} maps outside the plot: {py}");
    }
}

#[test]
fn month_ticks_pick_yearly_steps_for_long_ranges() {
    let ticks = month_ticks(ym(2000, 1), ym(2016, 12), 10);
    assert!(ticks.len() <= 10);
    assert!(ticks.iter().all(|d| d.format("%m").to_string() == "01"));
    assert_eq!(ticks[0], ym(2000, 1));
}

#[test]
fn month_ticks_monthly_for_short_ranges() {
    let ticks = month_ticks(ym(2000, 1), ym(2000, 6), 8);
    assert_eq!(ticks.len(), 6);
    let axis = Axis::time(ym(2000, 1), ym(2000, 6));
    assert_eq!(axis.ticks(8)[0].1, "Jan 2000");
}

#[test]
fn scales_map_domain_ends_to_plot_edges() {
    let xs = TimeScale::new(70.0, 750.0, 0.0, 100.0);
    assert_eq!(xs.to_px(0.0), 70.0);
    assert_eq!(xs.to_px(100.0), 750.0);
    assert_eq!(xs.to_px(50.0), 410.0);

    let ys = ValueScale::new_linear(100.0, 380.0, 10.0, 20.0);
    assert_eq!(ys.to_px(10.0), 380.0);
    assert_eq!(ys.to_px(20.0), 100.0);

    // degenerate range widens instead of dividing by zero
    let flat = ValueScale::new_linear(100.0, 380.0, 5.0, 5.0);
    assert!(flat.to_px(5.0).is_finite());
}

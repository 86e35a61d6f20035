// File: crates/trends-cli/tests/config.rs
// Purpose: Chart configuration parsing and line-chart selection.

use trends_cli::config::{parse_charts, select_charts};
use trends_cli::ChartType;
use trends_series::{ScaleUnit, Schema};

const CHARTS: &str = r#"[
  {"source": "num_data_AUT.csv", "elementID": "auto-loan-originations", "chartType": "line", "schema": "grouped-seasonal"},
  {"source": "volume_data_Age_Group_AUT.csv", "elementID": "auto-loan-age-30", "chartType": "line",
   "group": "Younger than 30", "schema": "standard"},
  {"source": "map_data_AUT.csv", "elementID": "auto-loan-map", "chartType": "map", "schema": "standard"},
  {"source": "volume_data_AUT.csv", "elementID": "", "chartType": "line", "schema": "grouped-seasonal"},
  {"source": "volume_data_CRC.csv", "elementID": "credit-card-volume", "chartType": "line", "group": "", "schema": "grouped-seasonal"}
]"#;

#[test]
fn parses_records_and_unknown_chart_types() {
    let charts = parse_charts(CHARTS).expect("parse");
    assert_eq!(charts.len(), 5);
    assert_eq!(charts[0].element_id, "auto-loan-originations");
    assert_eq!(charts[0].schema, Schema::GroupedSeasonal);
    assert_eq!(charts[2].chart_type, ChartType::Other);
    assert_eq!(charts[1].group.as_deref(), Some("Younger than 30"));
}

#[test]
fn build_options_follow_source_and_group() {
    let charts = parse_charts(CHARTS).unwrap();
    let counts = charts[0].build_options();
    assert_eq!(counts.scale, ScaleUnit::Millions);
    assert_eq!(counts.group_filter, None);

    let age = charts[1].build_options();
    assert_eq!(age.scale, ScaleUnit::Billions);
    assert_eq!(age.group_filter.as_deref(), Some("Younger than 30"));

    // empty group means no filter
    assert_eq!(charts[4].build_options().group_filter, None);
}

#[test]
fn selects_line_charts_with_targets() {
    let ids = |only: &[String]| {
        select_charts(parse_charts(CHARTS).unwrap(), only)
            .into_iter()
            .map(|c| c.element_id)
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&[]), vec!["auto-loan-originations", "auto-loan-age-30", "credit-card-volume"]);
    assert_eq!(ids(&["auto-loan-age-30".to_string(), "auto-loan-map".to_string()]), vec!["auto-loan-age-30"]);
}

#[test]
fn schema_is_required() {
    let err = parse_charts(r#"[{"source": "a.csv", "elementID": "a", "chartType": "line"}]"#).unwrap_err();
    assert!(format!("{err:#}").contains("schema"));
}

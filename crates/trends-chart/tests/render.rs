// File: crates/trends-chart/tests/render.rs
// Purpose: End-to-end render of a built series set to SVG and PNG.

use trends_chart::{LineChart, RenderOptions};
use trends_series::{build_series, BuildOptions, EpochMonths, RawRow, ScaleUnit, Schema, SeriesSet};

fn two_years() -> SeriesSet {
    let rows = (0..24)
        .flat_map(|m: i64| {
            [("Seasonally Adjusted", 40.0), ("Unadjusted", 38.0)].into_iter().map(move |(s, base)| {
                let v = (base + (m as f64 * 0.5).sin() * 3.0) * 1e9;
                RawRow::from_pairs([
                    ("month", m.to_string()),
                    ("volume", format!("{v:.0}")),
                    ("seasonal", s.to_string()),
                ])
            })
        })
        .collect::<Vec<_>>();
    build_series(&rows, &BuildOptions::new(Schema::Standard, ScaleUnit::Billions), &EpochMonths::default())
        .expect("build")
}

fn quiet() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    opts
}

#[test]
fn chart_holds_four_segments_and_marker() {
    let chart = LineChart::from_series(&two_years());
    assert_eq!(chart.series.len(), 4);
    assert!(chart.series.iter().all(|s| s.is_drawable()));
    assert!(chart.marker.is_some());
    assert_eq!(chart.y_axis.label, "Loan volume (in billions of dollars)");
    assert!(chart.x_axis.min < chart.x_axis.max);
}

/// `<path ...>` elements of an SVG document, one string per element.
fn path_elements(svg: &str) -> Vec<&str> {
    svg.split("<path")
        .skip(1)
        .map(|rest| rest.split('>').next().unwrap_or(rest))
        .collect()
}

#[test]
fn svg_has_one_path_per_segment_with_projected_dashed() {
    let chart = LineChart::from_series(&two_years());
    let bytes = chart.render_svg_bytes(&quiet()).expect("svg render");
    let svg = String::from_utf8(bytes).expect("svg is utf-8");
    assert!(svg.contains("<svg"), "missing svg root");

    // axes, grid and marker are plain lines; only the segments are paths
    let paths = path_elements(&svg);
    assert_eq!(paths.len(), 4, "expected exactly the four segment paths");

    // dashing is baked into the outline: each dash starts its own subpath
    let subpaths = paths.iter().map(|p| p.matches('M').count()).collect::<Vec<_>>();
    assert_eq!(subpaths[0], 1, "historical unadjusted is one solid stroke");
    assert!(subpaths[1] > 1, "projected unadjusted should be dashed");
    assert_eq!(subpaths[2], 1, "historical adjusted is one solid stroke");
    assert!(subpaths[3] > 1, "projected adjusted should be dashed");
}

#[test]
fn png_has_surface_dimensions() {
    let chart = LineChart::from_series(&two_years());
    let opts = quiet();
    let bytes = chart.render_png_bytes(&opts).expect("png render");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.width(), opts.width as u32);
    assert_eq!(img.height(), opts.height as u32);
    // light theme background at the top-left corner
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn writes_files_and_creates_parents() {
    let chart = LineChart::from_series(&two_years());
    let out = std::path::PathBuf::from("target/test_out/nested/chart.svg");
    chart.render_to_svg(&quiet(), &out).expect("write svg");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);

    let png = std::path::PathBuf::from("target/test_out/nested/png/chart.png");
    chart.render_to_png(&quiet(), &png).expect("write png");
    let bytes = std::fs::read(&png).expect("png exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn surface_smaller_than_insets_is_an_error() {
    let chart = LineChart::from_series(&two_years());
    let mut opts = quiet();
    opts.width = 50;
    assert!(chart.render_png_bytes(&opts).is_err());
}

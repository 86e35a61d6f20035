// File: crates/trends-chart/src/chart.rs
// Summary: LineChart model and headless rendering to SVG (Skia SVG canvas) and PNG (CPU raster).

use anyhow::Result;
use skia_safe as skia;
use trends_series::SeriesSet;

use crate::axis::{day_number, Axis};
use crate::geometry::PlotRect;
use crate::scale::{TimeScale, ValueScale};
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const TICK_FONT: f32 = 12.0;
const LABEL_FONT: f32 = 13.0;
const X_TICKS: usize = 8;
const Y_TICKS: usize = 6;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Skip all text (ticks, captions, axis label).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// Vertical guide at the first projected month.
#[derive(Clone, Debug)]
pub struct ProjectedMarker {
    /// X position in axis units (days since CE).
    pub x: f64,
    pub caption: (String, String),
}

pub struct LineChart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub marker: Option<ProjectedMarker>,
}

impl LineChart {
    /// Chart of the four segments with axes spanning the set's domain.
    pub fn from_series(set: &SeriesSet) -> Self {
        let (first, last) = set.domain.months;
        let (vmin, vmax) = set.domain.volumes;
        Self {
            series: set.segments().map(|(segment, points)| Series::from_points(segment, points)).collect(),
            x_axis: Axis::time(first, last),
            y_axis: Axis::value(set.scale.axis_label(), vmin, vmax, set.scale.suffix()),
            marker: Some(ProjectedMarker { x: day_number(set.cutoff), caption: set.projection_caption() }),
        }
    }

    /// Draw the whole chart onto `canvas`.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) -> Result<()> {
        let plot = PlotRect::inside(opts.width, opts.height, &opts.insets)
            .ok_or_else(|| anyhow::anyhow!("surface {}x{} leaves no plot area", opts.width, opts.height))?;
        let xs = TimeScale::new(plot.left, plot.right, self.x_axis.min, self.x_axis.max);
        let ys = ValueScale::new_linear(plot.top, plot.bottom, self.y_axis.min, self.y_axis.max);
        let text = opts.draw_labels.then(TextShaper::new);
        let theme = &opts.theme;

        canvas.clear(theme.background);

        draw_y_axis(canvas, &plot, &ys, &self.y_axis, theme, text.as_ref());
        draw_x_axis(canvas, &plot, &xs, &self.x_axis, theme, text.as_ref());

        for s in self.series.iter().filter(|s| s.is_drawable()) {
            draw_line_series(canvas, &xs, &ys, s, theme);
        }

        if let Some(marker) = &self.marker {
            draw_projected_marker(canvas, &plot, &xs, marker, theme, text.as_ref());
        }
        if let Some(text) = &text {
            draw_axis_label(canvas, &plot, &self.y_axis.label, theme, text);
        }
        Ok(())
    }

    /// Render to SVG document bytes.
    pub fn render_svg_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let bounds = skia::Rect::from_iwh(opts.width, opts.height);
        let canvas = skia::svg::Canvas::new(bounds, None);
        self.draw(&canvas, opts)?;
        let data = canvas.end();
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to an SVG file at `output_svg_path`.
    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_svg_bytes(opts)?;
        write_output(output_svg_path.as_ref(), &bytes)
    }

    /// Render to PNG bytes using a CPU raster surface.
    pub fn render_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts)?;

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_png_bytes(opts)?;
        write_output(output_png_path.as_ref(), &bytes)
    }
}

fn write_output(path: &std::path::Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_x_axis(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    xs: &TimeScale,
    axis: &Axis,
    theme: &Theme,
    text: Option<&TextShaper>,
) {
    let axis_paint = stroke(theme.axis_line, 1.0);
    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &axis_paint);

    let tick_paint = stroke(theme.tick, 1.0);
    for (x, label) in axis.ticks(X_TICKS) {
        let px = xs.to_px(x);
        canvas.draw_line((px, plot.bottom), (px, plot.bottom + 6.0), &tick_paint);
        if let Some(text) = text {
            text.draw_centered(canvas, &label, px, plot.bottom + 6.0 + TICK_FONT, TICK_FONT, theme.tick);
        }
    }
}

/// Horizontal rules spanning the plot at each value tick, labels left of the plot.
fn draw_y_axis(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    ys: &ValueScale,
    axis: &Axis,
    theme: &Theme,
    text: Option<&TextShaper>,
) {
    let grid_paint = stroke(theme.grid, 1.0);
    for (y, label) in axis.ticks(Y_TICKS) {
        let py = ys.to_px(y);
        canvas.draw_line((plot.left, py), (plot.right, py), &grid_paint);
        if let Some(text) = text {
            text.draw_right(canvas, &label, plot.left - 6.0, py + TICK_FONT * 0.35, TICK_FONT, theme.tick);
        }
    }
}

fn draw_line_series(canvas: &skia::Canvas, xs: &TimeScale, ys: &ValueScale, series: &Series, theme: &Theme) {
    let data = &series.data_xy;
    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((xs.to_px(x0), ys.to_px(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((xs.to_px(x), ys.to_px(y)));
    }

    let mut paint = stroke(theme.stroke_for(series.segment), 2.0);
    if series.segment.projected {
        paint.set_path_effect(skia::PathEffect::dash(&[6.0, 4.0], 0.0));
    }
    canvas.draw_path(&path, &paint);
}

fn draw_projected_marker(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    xs: &TimeScale,
    marker: &ProjectedMarker,
    theme: &Theme,
    text: Option<&TextShaper>,
) {
    let px = xs.to_px(marker.x);
    canvas.draw_line((px, plot.top), (px, plot.bottom), &stroke(theme.marker, 1.0));

    if let Some(text) = text {
        let (first, second) = &marker.caption;
        text.draw_centered(canvas, first, px, plot.top - 40.0, LABEL_FONT, theme.axis_label);
        text.draw_centered(canvas, second, px, plot.top - 18.0, LABEL_FONT, theme.axis_label);
    }
}

/// Rotated value-axis label, reading upward and ending just below the plot top.
fn draw_axis_label(canvas: &skia::Canvas, plot: &PlotRect, label: &str, theme: &Theme, text: &TextShaper) {
    if label.is_empty() {
        return;
    }
    canvas.save();
    canvas.translate((plot.left - 52.0, plot.top + 20.0));
    canvas.rotate(-90.0, None);
    text.draw_right(canvas, label, 0.0, 0.0, LABEL_FONT, theme.axis_label);
    canvas.restore();
}

// File: crates/trends-cli/src/task.rs
// Summary: One render task per chart: fetch, build series, draw, write. Tasks run independently on rayon.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, error, info};
use trends_chart::{LineChart, RenderOptions, Theme};
use trends_series::{build_series, parse_rows, EpochMonths};

use crate::config::ChartConfig;
use crate::fetch::Fetcher;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Svg,
    Png,
    Both,
}

impl OutputFormat {
    pub fn svg(self) -> bool {
        matches!(self, Self::Svg | Self::Both)
    }
    pub fn png(self) -> bool {
        matches!(self, Self::Png | Self::Both)
    }
}

pub struct RenderSettings {
    pub out_dir: PathBuf,
    pub format: OutputFormat,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("target/out"),
            format: OutputFormat::Svg,
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

pub struct TaskOutcome {
    pub element_id: String,
    /// Written files, or why this chart was not drawn.
    pub result: Result<Vec<PathBuf>>,
}

/// Render one chart. Any failure aborts only this chart; nothing is written for it.
pub fn run_task(chart: &ChartConfig, fetcher: &dyn Fetcher, settings: &RenderSettings) -> Result<Vec<PathBuf>> {
    let text = fetcher.fetch(&chart.source).with_context(|| format!("fetching {}", chart.source))?;
    debug!(element = %chart.element_id, bytes = text.len(), "fetched source");

    let table = parse_rows(&text).with_context(|| format!("parsing {}", chart.source))?;
    let options = chart.build_options();
    if let Some(group) = &options.group_filter {
        info!(element = %chart.element_id, group = %group, "filtering by group");
    }
    let set = build_series(&table.rows, &options, &EpochMonths::default())
        .with_context(|| format!("building series from {}", chart.source))?;
    info!(
        element = %chart.element_id,
        rows = table.rows.len(),
        cutoff = %set.cutoff,
        scale = ?set.scale,
        "series built"
    );

    for (segment, points) in set.segments() {
        debug!(element = %chart.element_id, segment = segment.class_name(), points = points.len(), "segment");
    }

    let chart_model = LineChart::from_series(&set);
    let opts = RenderOptions { theme: settings.theme, draw_labels: settings.draw_labels, ..RenderOptions::default() };

    // encode everything before touching the out dir
    let mut outputs = Vec::new();
    if settings.format.svg() {
        outputs.push(("svg", chart_model.render_svg_bytes(&opts)?));
    }
    if settings.format.png() {
        outputs.push(("png", chart_model.render_png_bytes(&opts)?));
    }
    write_outputs(&settings.out_dir, &chart.element_id, &outputs)
}

/// Write `<stem>.<ext>` files; on a failed write, remove the ones already written.
fn write_outputs(out_dir: &Path, stem: &str, outputs: &[(&str, Vec<u8>)]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let mut written = Vec::with_capacity(outputs.len());
    for (ext, bytes) in outputs {
        let path = out_dir.join(format!("{stem}.{ext}"));
        if let Err(e) = std::fs::write(&path, bytes) {
            for p in &written {
                let _ = std::fs::remove_file(p);
            }
            return Err(e).with_context(|| format!("writing {}", path.display()));
        }
        written.push(path);
    }
    Ok(written)
}

/// Run every chart concurrently. Outcomes come back in configuration order.
pub fn render_all(charts: &[ChartConfig], fetcher: &dyn Fetcher, settings: &RenderSettings) -> Vec<TaskOutcome> {
    charts
        .par_iter()
        .map(|chart| {
            let result = run_task(chart, fetcher, settings);
            match &result {
                Ok(paths) => {
                    for p in paths {
                        info!(element = %chart.element_id, "wrote {}", p.display());
                    }
                }
                Err(e) => error!(element = %chart.element_id, "chart failed: {e:#}"),
            }
            TaskOutcome { element_id: chart.element_id.clone(), result }
        })
        .collect()
}

// File: crates/trends-cli/src/config.rs
// Summary: Chart configuration records ({source, elementID, chartType, group, schema}) and selection.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};
use trends_series::{BuildOptions, Schema};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChartConfig {
    /// CSV file name, resolved against the fetcher's base.
    pub source: String,
    /// Output target; also the output file stem.
    #[serde(rename = "elementID")]
    pub element_id: String,
    #[serde(rename = "chartType")]
    pub chart_type: ChartType,
    /// Category to plot from a multi-category file.
    #[serde(default)]
    pub group: Option<String>,
    pub schema: Schema,
}

impl ChartConfig {
    /// Group filter, treating an empty string as no filter.
    pub fn group_filter(&self) -> Option<&str> {
        self.group.as_deref().filter(|g| !g.is_empty())
    }

    pub fn build_options(&self) -> BuildOptions {
        let opts = BuildOptions::for_source(self.schema, &self.source);
        match self.group_filter() {
            Some(group) => opts.with_group(group),
            None => opts,
        }
    }
}

pub fn parse_charts(text: &str) -> Result<Vec<ChartConfig>> {
    serde_json::from_str(text).context("parsing chart configuration")
}

pub fn load_charts(path: &Path) -> Result<Vec<ChartConfig>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_charts(&text).with_context(|| format!("in {}", path.display()))
}

/// Line charts with a usable target; when `only` is non-empty, just those ids.
pub fn select_charts(charts: Vec<ChartConfig>, only: &[String]) -> Vec<ChartConfig> {
    charts
        .into_iter()
        .filter(|c| {
            if c.chart_type != ChartType::Line {
                debug!(element = %c.element_id, "skipping non-line chart");
                return false;
            }
            if c.element_id.trim().is_empty() {
                warn!(source = %c.source, "skipping chart without elementID");
                return false;
            }
            only.is_empty() || only.iter().any(|id| id == &c.element_id)
        })
        .collect()
}

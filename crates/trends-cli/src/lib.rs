// File: crates/trends-cli/src/lib.rs
// Summary: Chart configuration, source fetching and per-chart render tasks behind `trends-render`.

pub mod config;
pub mod fetch;
pub mod task;

pub use config::{ChartConfig, ChartType};
pub use fetch::{fetcher_for, DirFetcher, Fetcher, HttpFetcher, DATA_FILE_PATH};
pub use task::{render_all, run_task, OutputFormat, RenderSettings, TaskOutcome};

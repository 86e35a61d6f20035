// File: crates/trends-cli/src/main.rs
// Summary: `trends-render` binary: load the chart list, render each line chart, report failures.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use trends_cli::config::{load_charts, select_charts};
use trends_cli::{fetcher_for, render_all, OutputFormat, RenderSettings, DATA_FILE_PATH};

#[derive(Parser)]
#[command(name = "trends-render")]
#[command(about = "Render loan volume line charts from CSV sources")]
struct Cli {
    /// Chart configuration list (JSON array)
    #[arg(long, default_value = "charts.json")]
    config: PathBuf,
    /// Base URL or local directory the chart sources are read from
    #[arg(long, default_value = DATA_FILE_PATH)]
    base: String,
    /// Directory the rendered files are written to
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,
    /// Theme preset: light or dark
    #[arg(long, default_value = "light")]
    theme: String,
    /// Render only this elementID (repeatable)
    #[arg(long)]
    only: Vec<String>,
    /// Worker threads (defaults to one per core)
    #[arg(long)]
    jobs: Option<usize>,
    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
    /// Omit ticks, captions and axis labels
    #[arg(long)]
    no_labels: bool,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env).init();

    let cli = Cli::parse();

    if let Some(jobs) = cli.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs.max(1))
            .build_global()
            .context("configuring worker pool")?;
    }

    let theme = trends_chart::theme::find(&cli.theme)
        .ok_or_else(|| anyhow::anyhow!("unknown theme '{}'", cli.theme))?;
    let charts = select_charts(load_charts(&cli.config)?, &cli.only);
    if charts.is_empty() {
        warn!("no line charts selected; nothing to do");
        return Ok(());
    }
    info!(charts = charts.len(), base = %cli.base, "rendering");

    let fetcher = fetcher_for(&cli.base, Duration::from_secs(cli.timeout_secs))?;
    let settings = RenderSettings {
        out_dir: cli.out_dir,
        format: cli.format,
        theme,
        draw_labels: !cli.no_labels,
    };

    let outcomes = render_all(&charts, fetcher.as_ref(), &settings);
    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    info!(ok = outcomes.len() - failed, failed, "done");

    if failed > 0 {
        anyhow::bail!("{failed} of {} charts failed", outcomes.len());
    }
    Ok(())
}

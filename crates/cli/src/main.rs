mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use doping_plot_core::ChartConfig;
use doping_plot_core::fetch::{FileSource, HttpSource};
use doping_plot_core::pipeline::render_page;
use tracing_subscriber::EnvFilter;

use output::OutputFormat;

/// Render the Alpe d'Huez doping scatterplot.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Dataset URL (defaults to the URL in the chart config).
    #[arg(long, conflicts_with = "input")]
    url: Option<String>,

    /// Read the dataset from a local JSON file instead of the network.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the result here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// JSON chart config (geometry, labels, dataset URL).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use the dark palette.
    #[arg(long)]
    dark: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ChartConfig::from_file(path)?,
        None => ChartConfig::default(),
    };

    let page = match (&args.input, &args.url) {
        (Some(path), _) => render_page(&FileSource::new(path), config).await,
        (None, url) => {
            let url = url.clone().unwrap_or_else(|| config.dataset_url.clone());
            render_page(&HttpSource::new(url), config).await
        }
    };

    let rendered = output::render(&page, args.format, args.dark)?;
    output::write(args.output.as_deref(), &rendered)
        .with_context(|| format!("writing {} output", args.format))?;
    tracing::info!(
        records = page.chart.records().len(),
        format = %args.format,
        "rendered chart"
    );
    Ok(())
}

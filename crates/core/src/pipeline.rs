//! Load-time pipeline: fetch, parse, lay out.

use thiserror::Error;

use crate::chart::Chart;
use crate::config::ChartConfig;
use crate::fetch::{DatasetSource, FetchError};
use crate::page::Page;
use crate::parsers::{CyclistParseError, parse_dataset};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),
    #[error("parse: {0}")]
    Parse(#[from] CyclistParseError),
}

/// Fetch and parse the dataset, then lay out the chart.
pub async fn load_chart<S: DatasetSource>(
    source: &S,
    config: ChartConfig,
) -> Result<Chart, PipelineError> {
    tracing::info!(source = %source.describe(), "fetching dataset");
    let data = source.fetch().await?;
    tracing::debug!(bytes = data.len(), "fetched dataset");
    let records = parse_dataset(&data)?;
    Ok(Chart::build(config, records))
}

/// Build the page for `source`.
///
/// Fetch or parse failures are logged here and leave the page with an
/// empty drawing surface and a hidden tooltip; they never reach the caller.
pub async fn render_page<S: DatasetSource>(source: &S, config: ChartConfig) -> Page {
    match load_chart(source, config.clone()).await {
        Ok(chart) => Page::new(chart),
        Err(err) => {
            tracing::error!(source = %source.describe(), "failed to load dataset: {err}");
            Page::new(Chart::empty(config))
        }
    }
}

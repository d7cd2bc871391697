use std::fmt;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use doping_plot_core::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML page with the tooltip panel and the chart.
    Html,
    /// The chart alone.
    Svg,
    /// Render commands as JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Svg => write!(f, "svg"),
            Self::Json => write!(f, "json"),
        }
    }
}

pub fn render(page: &Page, format: OutputFormat, dark: bool) -> Result<String> {
    Ok(match format {
        OutputFormat::Html => page.to_html(dark),
        OutputFormat::Svg => page.chart.to_svg(dark),
        OutputFormat::Json => page.to_json()?,
    })
}

/// Write to `path`, or stdout when none is given.
pub fn write(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, contents)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

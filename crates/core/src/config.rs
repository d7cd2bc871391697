use std::path::Path;

use doping_plot_protocol::Margin;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Fixed texts drawn on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    pub subtitle: String,
    pub x_axis: String,
    pub y_axis: String,
    /// Rotated label beside the y axis.
    pub side: String,
    pub legend_doping: String,
    pub legend_clean: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Doping in Professional Bicycle Racing".into(),
            subtitle: "35 Fastest times up Alpe d'Huez".into(),
            x_axis: "Year".into(),
            y_axis: "Best Time (minutes)".into(),
            side: "Time in Minutes".into(),
            legend_doping: "Riders with doping allegations".into(),
            legend_clean: "No doping allegations".into(),
        }
    }
}

/// Chart geometry, texts, and dataset location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Outer SVG width including margins.
    pub width: f64,
    /// Outer SVG height including margins.
    pub height: f64,
    pub margin: Margin,
    pub dot_radius: f64,
    pub labels: Labels,
    pub dataset_url: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 920.0,
            height: 630.0,
            margin: Margin::default(),
            dot_radius: 6.0,
            labels: Labels::default(),
            dataset_url: DEFAULT_DATASET_URL.into(),
        }
    }
}

impl ChartConfig {
    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let data = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        serde_json::from_slice(&data).map_err(|source| ConfigError::Json {
            path: display,
            source,
        })
    }

    /// Width of the area inside the margins.
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Height of the area inside the margins.
    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

pub mod chart;
pub mod config;
pub mod model;
pub mod page;
pub mod parsers;
pub mod scales;
pub mod svg;
pub mod tooltip;
pub mod views;

#[cfg(feature = "fetch")]
pub mod fetch;
#[cfg(feature = "fetch")]
pub mod pipeline;

pub use chart::{Chart, Scales};
pub use config::ChartConfig;
pub use model::Record;
pub use page::Page;
pub use tooltip::TooltipController;

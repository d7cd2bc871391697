use std::fmt::Write;

use crate::chart::Chart;
use crate::svg::{escape_xml, resolve_color};
use crate::tooltip::TooltipController;
use doping_plot_protocol::ThemeToken;

const TOOLTIP_STYLE: &str = "position:absolute;padding:6px 8px;font:12px sans-serif;\
background:rgba(255,255,224,0.95);border:1px solid #999;border-radius:4px;pointer-events:none";

/// Everything the page shows: the chart surface and the tooltip panel.
#[derive(Debug, Clone)]
pub struct Page {
    pub chart: Chart,
    pub tooltip: TooltipController,
}

impl Page {
    pub fn new(chart: Chart) -> Self {
        Self {
            chart,
            tooltip: TooltipController::new(),
        }
    }

    /// Full HTML document: tooltip `div#tooltip` followed by the chart SVG.
    pub fn to_html(&self, dark: bool) -> String {
        let state = self.tooltip.state();
        let mut html = String::with_capacity(4096);
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n",
            escape_xml(&self.chart.config().labels.title),
        );
        let _ = writeln!(
            html,
            r#"<body style="margin:0;background:{}">"#,
            resolve_color(ThemeToken::Background, dark)
        );

        let _ = write!(
            html,
            r#"<div class="tooltip" id="tooltip" style="{TOOLTIP_STYLE};opacity:{};left:{}px;top:{}px""#,
            state.opacity, state.left, state.top,
        );
        if let Some(year) = state.data_year {
            let _ = write!(html, r#" data-year="{year}""#);
        }
        let _ = writeln!(html, ">{}</div>", self.tooltip.html());

        html.push_str(&self.chart.to_svg(dark));
        html.push_str("\n</body>\n</html>\n");
        html
    }

    /// The chart's render commands as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self.chart.commands())
    }
}

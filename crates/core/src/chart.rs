use doping_plot_protocol::{Point, RenderCommand};

use crate::config::ChartConfig;
use crate::model::Record;
use crate::parsers::{CyclistParseError, parse_dataset};
use crate::scales::{LinearScale, OrdinalScale, TimeScale};
use crate::svg;
use crate::tooltip::TooltipController;
use crate::views::scatter::DotRegion;
use crate::views::{axis, labels, legend, scatter};

/// The three scales of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: TimeScale,
    pub color: OrdinalScale<bool>,
}

impl Scales {
    /// Scales spanning the plot area, domains not yet bound.
    pub fn for_config(config: &ChartConfig) -> Self {
        Self {
            x: LinearScale::new((0.0, config.plot_width())),
            y: TimeScale::new((0.0, config.plot_height())),
            color: OrdinalScale::new(),
        }
    }

    /// Bind domains: years padded by one on each side, the full extent of
    /// race times, and doping status in order of first appearance.
    pub fn fit(&mut self, records: &[Record]) {
        self.color = OrdinalScale::from_keys(records.iter().map(Record::has_doping_allegation));

        let Some(first) = records.first() else {
            tracing::warn!("no records; keeping default scale domains");
            return;
        };
        let (mut min_year, mut max_year) = (first.year, first.year);
        let (mut min_time, mut max_time) = (first.time, first.time);
        for r in &records[1..] {
            min_year = min_year.min(r.year);
            max_year = max_year.max(r.year);
            min_time = min_time.min(r.time);
            max_time = max_time.max(r.time);
        }

        self.x
            .set_domain((f64::from(min_year) - 1.0, f64::from(max_year) + 1.0));
        self.y.set_domain(min_time, max_time);
        tracing::debug!(
            x_domain = ?self.x.domain(),
            y_domain = ?self.y.domain(),
            "bound scale domains"
        );
    }
}

/// A laid-out scatterplot: records, scales, render commands, and the hover
/// targets of its dots.
#[derive(Debug, Clone)]
pub struct Chart {
    config: ChartConfig,
    records: Vec<Record>,
    scales: Scales,
    commands: Vec<RenderCommand>,
    dots: Vec<DotRegion>,
}

impl Chart {
    /// The bare drawing surface: no axes, no points.
    pub fn empty(config: ChartConfig) -> Self {
        let scales = Scales::for_config(&config);
        Self {
            config,
            records: Vec::new(),
            scales,
            commands: Vec::new(),
            dots: Vec::new(),
        }
    }

    /// Lay out the full chart for `records`.
    pub fn build(config: ChartConfig, records: Vec<Record>) -> Self {
        let mut scales = Scales::for_config(&config);
        scales.fit(&records);

        let plot_width = config.plot_width();
        let plot_height = config.plot_height();
        let text = &config.labels;

        let mut commands = vec![RenderCommand::PushTransform {
            translate: Point::new(config.margin.left, config.margin.top),
        }];
        commands.extend(axis::render_x_axis(&scales.x, plot_height, &text.x_axis));
        commands.extend(axis::render_y_axis(&scales.y, &text.y_axis));
        commands.push(labels::render_side_label(&text.side));

        let (dot_commands, dots) = scatter::render_dots(
            &records,
            &scales.x,
            &scales.y,
            &scales.color,
            config.dot_radius,
        );
        commands.extend(dot_commands);

        commands.push(labels::render_title(
            &text.title,
            plot_width,
            config.margin.top,
        ));
        commands.push(labels::render_subtitle(
            &text.subtitle,
            plot_width,
            config.margin.top,
        ));
        commands.extend(legend::render_legend(
            &scales.color,
            text,
            plot_width,
            plot_height,
        ));
        commands.push(RenderCommand::PopTransform);

        tracing::debug!(
            records = records.len(),
            commands = commands.len(),
            "built chart"
        );
        Self {
            config,
            records,
            scales,
            commands,
            dots,
        }
    }

    /// Parse a dataset and lay out the chart for it.
    pub fn from_json(config: ChartConfig, data: &[u8]) -> Result<Self, CyclistParseError> {
        Ok(Self::build(config, parse_dataset(data)?))
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn dots(&self) -> &[DotRegion] {
        &self.dots
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Record index of the topmost dot under `at` (SVG coordinates).
    pub fn hit_test(&self, at: Point) -> Option<usize> {
        let local = Point::new(at.x - self.config.margin.left, at.y - self.config.margin.top);
        self.dots
            .iter()
            .rev()
            .find(|d| d.contains(local))
            .map(|d| d.datum)
    }

    /// Feed a pointer position to the tooltip: entering a dot shows it,
    /// leaving all dots hides it. `page` is where the panel is anchored.
    pub fn track_pointer(&self, tooltip: &mut TooltipController, at: Point, page: Point) {
        match self.hit_test(at) {
            Some(datum) => {
                let already_shown = tooltip.is_visible() && tooltip.state().datum == Some(datum);
                if !already_shown && let Some(record) = self.records.get(datum) {
                    tooltip.show(record, datum, page);
                }
            }
            None if tooltip.is_visible() => tooltip.hide(),
            None => {}
        }
    }

    /// Standalone SVG document for the chart.
    pub fn to_svg(&self, dark: bool) -> String {
        svg::render_svg(&self.commands, self.config.width, self.config.height, dark)
    }
}

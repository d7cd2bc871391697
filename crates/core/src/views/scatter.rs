use doping_plot_protocol::{Attribute, Point, RenderCommand, ThemeToken};

use crate::model::Record;
use crate::scales::{LinearScale, OrdinalScale, TimeScale};
use crate::tooltip;

/// Hover target for one rendered dot, in plot-area coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotRegion {
    pub center: Point,
    pub radius: f64,
    /// Index of the record in the chart's record list.
    pub datum: usize,
}

impl DotRegion {
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance_to(p) <= self.radius
    }
}

/// One `circle.dot` per record, placed at (year, time) and colored by
/// whether the rider has a doping allegation.
pub fn render_dots(
    records: &[Record],
    x: &LinearScale,
    y: &TimeScale,
    color: &OrdinalScale<bool>,
    radius: f64,
) -> (Vec<RenderCommand>, Vec<DotRegion>) {
    let mut commands = Vec::with_capacity(records.len());
    let mut regions = Vec::with_capacity(records.len());

    for (datum, record) in records.iter().enumerate() {
        let center = Point::new(x.apply(f64::from(record.year)), y.apply(record.time));
        let fill = color
            .get(&record.has_doping_allegation())
            .unwrap_or(ThemeToken::TextSecondary);

        commands.push(RenderCommand::DrawCircle {
            center,
            radius,
            color: fill,
            class: Some("dot".into()),
            attributes: vec![
                Attribute::new("data-xvalue", record.year.to_string()),
                Attribute::new("data-yvalue", record.iso_time()),
            ],
            label: Some(tooltip::describe(record).join("\n")),
            datum: Some(datum),
        });
        regions.push(DotRegion {
            center,
            radius,
            datum,
        });
    }

    (commands, regions)
}

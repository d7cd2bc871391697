//! Integration test: parse a dataset file, lay out the chart, and check the
//! rendered elements against the records they came from.

use std::collections::HashSet;

use doping_plot_core::fetch::FileSource;
use doping_plot_core::pipeline::render_page;
use doping_plot_core::{Chart, ChartConfig, Page};
use doping_plot_protocol::{Point, RenderCommand, ThemeToken};

const FIXTURE: &[u8] = include_bytes!("fixtures/cyclist-data.json");

fn chart() -> Chart {
    Chart::from_json(ChartConfig::default(), FIXTURE).expect("fixture parses")
}

fn dots(chart: &Chart) -> Vec<&RenderCommand> {
    chart
        .commands()
        .iter()
        .filter(|c| c.is_circle_of_class("dot"))
        .collect()
}

#[test]
fn one_dot_per_record_with_raw_year() {
    let chart = chart();
    let dots = dots(&chart);
    assert_eq!(dots.len(), chart.records().len());

    for (dot, record) in dots.iter().zip(chart.records()) {
        assert_eq!(dot.attribute("data-xvalue"), Some(record.year.to_string().as_str()));
        assert_eq!(dot.attribute("data-yvalue"), Some(record.iso_time().as_str()));
    }
}

#[test]
fn x_domain_pads_year_extent() {
    let chart = chart();
    assert_eq!(chart.scales().x.domain(), (1993.0, 2016.0));
}

#[test]
fn fill_is_partitioned_by_doping() {
    let chart = chart();
    let mut doped_fills = HashSet::new();
    let mut clean_fills = HashSet::new();

    for (dot, record) in dots(&chart).iter().zip(chart.records()) {
        let RenderCommand::DrawCircle { color, .. } = dot else {
            unreachable!()
        };
        if record.has_doping_allegation() {
            doped_fills.insert(*color);
        } else {
            clean_fills.insert(*color);
        }
    }

    assert_eq!(doped_fills.len(), 1);
    assert_eq!(clean_fills.len(), 1);
    assert!(doped_fills.is_disjoint(&clean_fills));
    // First record has an allegation, so it claims the first palette entry.
    assert!(doped_fills.contains(&ThemeToken::Category(0)));
}

#[test]
fn svg_exposes_inspection_attributes() {
    let svg = chart().to_svg(false);
    assert!(svg.contains(r#"class="graph""#));
    assert!(svg.contains(r#"id="x-axis""#));
    assert!(svg.contains(r#"id="y-axis""#));
    assert!(svg.contains(r#"id="title""#));
    assert!(svg.contains(r#"id="legend""#));
    assert_eq!(svg.matches(r#"<circle class="dot""#).count(), 11);
    assert_eq!(svg.matches(r#"class="legend-label""#).count(), 2);
    assert!(svg.contains(r#"data-xvalue="1994" data-yvalue="1970-01-01T00:37:15.000Z""#));
}

#[test]
fn hovering_a_clean_rider() {
    let mut page = Page::new(chart());
    let (datum, dot) = page
        .chart
        .dots()
        .iter()
        .enumerate()
        .find(|(_, d)| page.chart.records()[d.datum].year == 1994)
        .map(|(i, d)| (i, *d))
        .expect("1994 record");
    let margin = page.chart.config().margin;
    let at = Point::new(dot.center.x + margin.left, dot.center.y + margin.top);

    let chart = page.chart.clone();
    chart.track_pointer(&mut page.tooltip, at, Point::new(400.0, 300.0));

    assert!(page.tooltip.is_visible());
    assert_eq!(page.tooltip.state().datum, Some(datum));
    assert_eq!(page.tooltip.state().data_year, Some(1994));
    let text = page.tooltip.text();
    assert!(text.contains("Year: 1994, Time: 37:15"));
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn hovering_an_accused_rider() {
    let mut page = Page::new(chart());
    let record = page.chart.records()[5].clone();
    assert_eq!(record.year, 2001);
    page.tooltip.show(&record, 5, Point::new(10.0, 40.0));
    assert!(
        page.tooltip
            .text()
            .ends_with("\n\nTested positive for EPO in 2005 Vuelta a España")
    );
    assert!(page.to_html(false).contains(r#"data-year="2001""#));
}

#[tokio::test]
async fn file_source_end_to_end() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/cyclist-data.json");
    let page = render_page(&FileSource::new(path), ChartConfig::default()).await;
    assert_eq!(page.chart.dots().len(), 11);
    assert!(!page.tooltip.is_visible());
}

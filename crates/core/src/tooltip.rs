//! Hover tooltip state.
//!
//! The controller owns the single tooltip panel. Pointer handling goes
//! through [`TooltipController::show`] / [`TooltipController::hide`], so
//! hover behavior is testable without a live pointer.

use doping_plot_protocol::Point;
use serde::Serialize;

use crate::model::Record;
use crate::svg::escape_xml;

/// Opacity of the panel while shown.
pub const VISIBLE_OPACITY: f64 = 0.9;
/// The panel is lifted this far above the pointer.
const POINTER_LIFT: f64 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Hidden,
    Visible,
}

/// Snapshot of the tooltip panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipState {
    pub visibility: Visibility,
    pub opacity: f64,
    /// Year of the last hovered point (`data-year`).
    pub data_year: Option<i32>,
    pub lines: Vec<String>,
    pub left: f64,
    pub top: f64,
    /// Record index of the last hovered point.
    pub datum: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipController {
    state: TooltipState,
}

impl Default for TooltipController {
    fn default() -> Self {
        Self::new()
    }
}

impl TooltipController {
    pub fn new() -> Self {
        Self {
            state: TooltipState {
                visibility: Visibility::Hidden,
                opacity: 0.0,
                data_year: None,
                lines: Vec::new(),
                left: 0.0,
                top: 0.0,
                datum: None,
            },
        }
    }

    /// Reveal the panel next to `pointer` (page coordinates) describing
    /// `record`. Replaces whatever was shown before.
    pub fn show(&mut self, record: &Record, datum: usize, pointer: Point) {
        self.state.visibility = Visibility::Visible;
        self.state.opacity = VISIBLE_OPACITY;
        self.state.data_year = Some(record.year);
        self.state.lines = describe(record);
        self.state.left = pointer.x;
        self.state.top = pointer.y - POINTER_LIFT;
        self.state.datum = Some(datum);
    }

    /// Fade the panel out. Content stays until the next `show`.
    pub fn hide(&mut self) {
        self.state.visibility = Visibility::Hidden;
        self.state.opacity = 0.0;
    }

    pub fn is_visible(&self) -> bool {
        self.state.visibility == Visibility::Visible
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    /// Panel text, one line per `\n`.
    pub fn text(&self) -> String {
        self.state.lines.join("\n")
    }

    /// Panel body as HTML, lines separated by `<br/>`.
    pub fn html(&self) -> String {
        self.state
            .lines
            .iter()
            .map(String::as_str)
            .map(escape_xml)
            .collect::<Vec<_>>()
            .join("<br/>")
    }
}

/// Tooltip lines for a record: rider and nationality, year and time, and
/// the doping allegation after a blank line when there is one.
pub fn describe(record: &Record) -> Vec<String> {
    let mut lines = vec![
        format!("{}: {}", record.name, record.nationality),
        format!("Year: {}, Time: {}", record.year, record.time_label()),
    ];
    if record.has_doping_allegation() {
        lines.push(String::new());
        lines.push(record.doping.clone());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_race_time;

    fn record(year: i32, time: &str, doping: &str) -> Record {
        Record {
            rank: 3,
            time: parse_race_time(time).unwrap(),
            year,
            name: "Marco Pantani".into(),
            nationality: "ITA".into(),
            doping: doping.into(),
            seconds: None,
            url: None,
        }
    }

    #[test]
    fn starts_hidden() {
        let tooltip = TooltipController::new();
        assert!(!tooltip.is_visible());
        assert_eq!(tooltip.state().opacity, 0.0);
        assert_eq!(tooltip.state().data_year, None);
    }

    #[test]
    fn clean_record_has_no_allegation_line() {
        let mut tooltip = TooltipController::new();
        tooltip.show(&record(1994, "37:15", ""), 0, Point::new(300.0, 200.0));

        assert!(tooltip.is_visible());
        assert_eq!(tooltip.state().opacity, VISIBLE_OPACITY);
        assert_eq!(tooltip.state().data_year, Some(1994));
        assert_eq!(tooltip.state().left, 300.0);
        assert_eq!(tooltip.state().top, 172.0);
        assert!(tooltip.text().contains("Year: 1994, Time: 37:15"));
        assert_eq!(tooltip.state().lines.len(), 2);
    }

    #[test]
    fn allegation_gets_extra_line() {
        let mut tooltip = TooltipController::new();
        tooltip.show(&record(2001, "36:50", "Admitted"), 0, Point::new(0.0, 0.0));
        assert_eq!(tooltip.state().lines.last().map(String::as_str), Some("Admitted"));
        assert_eq!(
            tooltip.html(),
            "Marco Pantani: ITA<br/>Year: 2001, Time: 36:50<br/><br/>Admitted"
        );
    }

    #[test]
    fn hide_then_show_other_point() {
        let mut tooltip = TooltipController::new();
        tooltip.show(&record(1994, "37:15", ""), 0, Point::new(10.0, 10.0));
        tooltip.hide();
        assert!(!tooltip.is_visible());
        assert_eq!(tooltip.state().opacity, 0.0);

        tooltip.show(&record(1997, "36:55", ""), 1, Point::new(50.0, 60.0));
        tooltip.show(&record(2004, "37:36", "Stripped"), 2, Point::new(70.0, 80.0));
        assert!(tooltip.is_visible());
        assert_eq!(tooltip.state().data_year, Some(2004));
        assert_eq!(tooltip.state().datum, Some(2));
        assert_eq!(tooltip.state().left, 70.0);
    }

    #[test]
    fn html_escapes_record_text() {
        let mut tooltip = TooltipController::new();
        tooltip.show(&record(2001, "36:50", "<b>x</b> & 'y'"), 0, Point::new(0.0, 0.0));
        assert!(tooltip.html().ends_with("&lt;b&gt;x&lt;/b&gt; &amp; &apos;y&apos;"));
    }
}

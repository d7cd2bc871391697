use chrono::{NaiveDateTime, SecondsFormat};

/// Format used for race times on the y axis and in the tooltip.
pub const TIME_FORMAT: &str = "%M:%S";

/// One timed ascent.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Position in the ranking (1 = fastest).
    pub rank: u32,
    /// Race time as a time of day on 1970-01-01; only h/m/s are meaningful.
    pub time: NaiveDateTime,
    pub year: i32,
    pub name: String,
    pub nationality: String,
    /// Free-text doping allegation. Empty means none.
    pub doping: String,
    /// Race time in seconds as published alongside `Time`, when present.
    pub seconds: Option<u32>,
    pub url: Option<String>,
}

impl Record {
    pub fn has_doping_allegation(&self) -> bool {
        !self.doping.is_empty()
    }

    /// `MM:SS` rendering of the race time.
    pub fn time_label(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }

    /// ISO 8601 timestamp of the race time, e.g. `1970-01-01T00:37:15.000Z`.
    pub fn iso_time(&self) -> String {
        self.time
            .and_utc()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

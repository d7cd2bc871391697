use chrono::{DateTime, NaiveDateTime};

use super::interpolate;

/// Candidate tick intervals in seconds, smallest first.
const TICK_INTERVALS_S: &[i64] = &[
    1,
    5,
    15,
    30,
    60,
    5 * 60,
    15 * 60,
    30 * 60,
    3_600,
    3 * 3_600,
    6 * 3_600,
    12 * 3_600,
    DAY_S,
    2 * DAY_S,
    7 * DAY_S,
    30 * DAY_S,
    YEAR_S,
];

const DAY_S: i64 = 86_400;
const YEAR_S: i64 = 365 * DAY_S;

/// Continuous scale over timestamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    /// Domain bounds in milliseconds since the epoch.
    domain_ms: (f64, f64),
    range: (f64, f64),
}

impl TimeScale {
    /// A scale over `range` whose domain is the first day after the epoch.
    pub fn new(range: (f64, f64)) -> Self {
        Self {
            domain_ms: (0.0, 86_400_000.0),
            range,
        }
    }

    pub fn with_domain(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.set_domain(start, end);
        self
    }

    pub fn set_domain(&mut self, start: NaiveDateTime, end: NaiveDateTime) {
        self.domain_ms = (to_ms(start), to_ms(end));
    }

    pub fn domain(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((from_ms(self.domain_ms.0)?, from_ms(self.domain_ms.1)?))
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn apply(&self, t: NaiveDateTime) -> f64 {
        interpolate(to_ms(t), self.domain_ms, self.range)
    }

    /// Ticks aligned to the standard interval closest to `span / count`.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDateTime> {
        let (lo, hi) = if self.domain_ms.0 <= self.domain_ms.1 {
            self.domain_ms
        } else {
            (self.domain_ms.1, self.domain_ms.0)
        };
        if lo == hi {
            return from_ms(lo).into_iter().collect();
        }

        let step_ms = (tick_interval((hi - lo) / 1000.0 / count.max(1) as f64) * 1000) as f64;
        let first = (lo / step_ms).ceil() as i64;
        let last = (hi / step_ms).floor() as i64;
        (first..=last)
            .filter_map(|i| from_ms(i as f64 * step_ms))
            .collect()
    }
}

/// Pick the interval (seconds) nearest to `target` on a ratio basis.
fn tick_interval(target_s: f64) -> i64 {
    let i = TICK_INTERVALS_S.partition_point(|&s| (s as f64) <= target_s);
    if i == 0 {
        return TICK_INTERVALS_S[0];
    }
    let Some(&upper) = TICK_INTERVALS_S.get(i) else {
        // Past a year: whole years, rounded up so the tick count stays at or below the target.
        return YEAR_S * (target_s / YEAR_S as f64).ceil() as i64;
    };
    let lower = TICK_INTERVALS_S[i - 1];
    if target_s / (lower as f64) < (upper as f64) / target_s {
        lower
    } else {
        upper
    }
}

fn to_ms(t: NaiveDateTime) -> f64 {
    t.and_utc().timestamp_millis() as f64
}

fn from_ms(ms: f64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(ms.round() as i64).map(|dt| dt.naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::TIME_FORMAT;
    use crate::parsers::parse_race_time;

    fn t(s: &str) -> NaiveDateTime {
        parse_race_time(s).unwrap()
    }

    #[test]
    fn fastest_time_maps_to_top() {
        let y = TimeScale::new((0.0, 500.0)).with_domain(t("36:50"), t("39:50"));
        assert_eq!(y.apply(t("36:50")), 0.0);
        assert_eq!(y.apply(t("39:50")), 500.0);
        assert!((y.apply(t("38:20")) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn three_minute_span_ticks_every_fifteen_seconds() {
        let y = TimeScale::new((0.0, 500.0)).with_domain(t("36:50"), t("39:50"));
        let labels: Vec<String> = y
            .ticks(10)
            .iter()
            .map(|tick| tick.format(TIME_FORMAT).to_string())
            .collect();
        assert_eq!(labels.first().map(String::as_str), Some("37:00"));
        assert_eq!(labels.last().map(String::as_str), Some("39:45"));
        assert_eq!(labels.len(), 12);
    }

    #[test]
    fn interval_choice() {
        assert_eq!(tick_interval(0.2), 1);
        assert_eq!(tick_interval(18.0), 15);
        assert_eq!(tick_interval(25.0), 30);
        assert_eq!(tick_interval(200.0), 300);
        assert_eq!(tick_interval(100_000.0), DAY_S);
        assert_eq!(tick_interval(600_000.0), 7 * DAY_S);
        assert_eq!(tick_interval(3e7), YEAR_S);
        assert_eq!(tick_interval(1e9), 32 * YEAR_S);
    }

    #[test]
    fn huge_span_keeps_tick_count_bounded() {
        let y = TimeScale::new((0.0, 500.0)).with_domain(t("00:00"), t("4000000000:00"));
        let ticks = y.ticks(10);
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= 20, "ticks={}", ticks.len());
    }

    #[test]
    fn domain_round_trips() {
        let y = TimeScale::new((0.0, 1.0)).with_domain(t("36:50"), t("39:50"));
        assert_eq!(y.domain(), Some((t("36:50"), t("39:50"))));
    }

    #[test]
    fn single_instant_domain() {
        let y = TimeScale::new((0.0, 500.0)).with_domain(t("37:00"), t("37:00"));
        assert_eq!(y.apply(t("37:00")), 0.0);
        assert_eq!(y.ticks(10), vec![t("37:00")]);
    }
}

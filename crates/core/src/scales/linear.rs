use super::interpolate;

/// Continuous numeric scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// A scale over `range` with the unit domain `[0, 1]`.
    pub fn new(range: (f64, f64)) -> Self {
        Self {
            domain: (0.0, 1.0),
            range,
        }
    }

    pub fn with_domain(mut self, domain: (f64, f64)) -> Self {
        self.domain = domain;
        self
    }

    pub fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn apply(&self, value: f64) -> f64 {
        interpolate(value, self.domain, self.range)
    }

    /// Roughly `count` evenly spaced, human-friendly values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        if lo == hi {
            return vec![lo];
        }
        let Some(step) = nice_step((hi - lo) / count.max(1) as f64) else {
            return Vec::new();
        };

        // Fractional steps divide by the inverse to keep ticks like 0.1 exact.
        if step < 1.0 {
            let inv = (1.0 / step).round();
            let first = (lo * inv).ceil() as i64;
            let last = (hi * inv).floor() as i64;
            (first..=last).map(|i| i as f64 / inv).collect()
        } else {
            let first = (lo / step).ceil() as i64;
            let last = (hi / step).floor() as i64;
            (first..=last).map(|i| i as f64 * step).collect()
        }
    }
}

/// Round a raw step up to 1, 2, or 5 times a power of ten.
fn nice_step(raw: f64) -> Option<f64> {
    if !raw.is_finite() || raw <= 0.0 {
        return None;
    }
    let power = raw.log10().floor();
    let magnitude = 10.0_f64.powf(power);
    let error = raw / magnitude;
    let factor = if error >= 50.0_f64.sqrt() {
        10.0
    } else if error >= 10.0_f64.sqrt() {
        5.0
    } else if error >= 2.0_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    Some(factor * magnitude)
}

/// Integer tick label.
pub fn format_integer(value: f64) -> String {
    format!("{}", value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_onto_range() {
        let x = LinearScale::new((0.0, 840.0)).with_domain((1993.0, 2016.0));
        assert_eq!(x.apply(1993.0), 0.0);
        assert_eq!(x.apply(2016.0), 840.0);
        assert!((x.apply(2004.5) - 420.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let x = LinearScale::new((10.0, 20.0)).with_domain((5.0, 5.0));
        assert_eq!(x.apply(5.0), 10.0);
        assert_eq!(x.ticks(10), vec![5.0]);
    }

    #[test]
    fn year_ticks_use_step_of_two() {
        let x = LinearScale::new((0.0, 840.0)).with_domain((1993.0, 2016.0));
        let ticks = x.ticks(10);
        assert_eq!(ticks.first(), Some(&1994.0));
        assert_eq!(ticks.last(), Some(&2016.0));
        assert_eq!(ticks.len(), 12);
    }

    #[test]
    fn fractional_ticks_are_exact() {
        let x = LinearScale::new((0.0, 100.0)).with_domain((0.0, 1.0));
        let ticks = x.ticks(10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[3], 0.3);
    }

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(2.3), Some(2.0));
        assert_eq!(nice_step(4.0), Some(5.0));
        assert_eq!(nice_step(8.0), Some(10.0));
        assert_eq!(nice_step(0.0), None);
    }

    #[test]
    fn integer_labels() {
        assert_eq!(format_integer(1994.0), "1994");
        assert_eq!(format_integer(2000.0000001), "2000");
    }
}

//! Data-to-pixel mappings used by the chart views.
//!
//! Scales are created with only a pixel range and get their domain bound
//! once the dataset is known.

pub mod linear;
pub mod ordinal;
pub mod time;

pub use linear::LinearScale;
pub use ordinal::OrdinalScale;
pub use time::TimeScale;

/// Default number of ticks an axis asks its scale for.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Linear interpolation from `domain` into `range`. A degenerate domain
/// maps everything to the start of the range.
fn interpolate(value: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    let span = domain.1 - domain.0;
    if span == 0.0 || !span.is_finite() {
        return range.0;
    }
    range.0 + (value - domain.0) / span * (range.1 - range.0)
}

pub mod cyclist;

pub use cyclist::{CyclistParseError, RaceTimeError, parse_dataset, parse_race_time};

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;

use crate::model::Record;

#[derive(Debug, Error)]
pub enum CyclistParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record {index}: invalid place {value:?}")]
    Place { index: usize, value: String },
    #[error("record {index}: {source}")]
    Time {
        index: usize,
        #[source]
        source: RaceTimeError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RaceTimeError {
    #[error("expected MM:SS, got {0:?}")]
    Shape(String),
    #[error("seconds out of range in {0:?}")]
    Seconds(String),
}

/// `Place` arrives either as a JSON number or a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PlaceValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawRecord {
    place: PlaceValue,
    time: String,
    year: i32,
    name: String,
    nationality: String,
    #[serde(default)]
    doping: String,
    #[serde(default)]
    seconds: Option<u32>,
    #[serde(default, rename = "URL")]
    url: Option<String>,
}

/// Parse the cyclist dataset: a JSON array of objects with `Place`, `Time`
/// (`MM:SS`), `Year`, `Name`, `Nationality`, and `Doping`.
///
/// A single malformed record fails the whole dataset.
pub fn parse_dataset(data: &[u8]) -> Result<Vec<Record>, CyclistParseError> {
    let raw: Vec<RawRecord> = serde_json::from_slice(data)?;
    let records = raw
        .into_iter()
        .enumerate()
        .map(|(index, r)| parse_record(index, r))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = records.len(), "parsed cyclist dataset");
    Ok(records)
}

fn parse_record(index: usize, raw: RawRecord) -> Result<Record, CyclistParseError> {
    let rank = parse_place(&raw.place).ok_or_else(|| CyclistParseError::Place {
        index,
        value: match &raw.place {
            PlaceValue::Number(n) => n.to_string(),
            PlaceValue::Text(s) => s.clone(),
        },
    })?;
    let time =
        parse_race_time(&raw.time).map_err(|source| CyclistParseError::Time { index, source })?;

    Ok(Record {
        rank,
        time,
        year: raw.year,
        name: raw.name,
        nationality: raw.nationality,
        doping: raw.doping,
        seconds: raw.seconds,
        url: raw.url,
    })
}

fn parse_place(place: &PlaceValue) -> Option<u32> {
    match place {
        PlaceValue::Number(n) if *n >= 0.0 && n.fract() == 0.0 && *n <= u32::MAX as f64 => {
            Some(*n as u32)
        }
        PlaceValue::Number(_) => None,
        PlaceValue::Text(s) => s.trim().parse().ok(),
    }
}

/// Parse an `MM:SS` race time into a time of day on 1970-01-01.
///
/// Minutes may exceed 59 and roll over into hours; seconds must be below 60.
pub fn parse_race_time(input: &str) -> Result<NaiveDateTime, RaceTimeError> {
    let shape = || RaceTimeError::Shape(input.to_string());

    let (minutes, seconds) = input.split_once(':').ok_or_else(shape)?;
    if seconds.contains(':') {
        return Err(shape());
    }
    let minutes: u32 = minutes.trim().parse().map_err(|_| shape())?;
    let seconds: u32 = seconds.trim().parse().map_err(|_| shape())?;
    if seconds >= 60 {
        return Err(RaceTimeError::Seconds(input.to_string()));
    }

    let total = i64::from(minutes) * 60 + i64::from(seconds);
    DateTime::from_timestamp(total, 0)
        .map(|dt| dt.naive_utc())
        .ok_or_else(shape)
}

//! CSV ingest for the per-city trip files.
//!
//! Columns are resolved by header name, so a leading unnamed index column or
//! reordered columns are harmless. Gender and Birth Year are optional; their
//! absence is a property of the city file, not an error. Rows that fail to
//! parse are skipped, counted and logged rather than aborting the load.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;

use super::{Dataset, Trip};
use crate::errors::DataError;
use crate::vocab::City;

const COL_START_TIME: &str = "start time";
const COL_END_TIME: &str = "end time";
const COL_DURATION: &str = "trip duration";
const COL_START_STATION: &str = "start station";
const COL_END_STATION: &str = "end station";
const COL_USER_TYPE: &str = "user type";
const COL_GENDER: &str = "gender";
const COL_BIRTH_YEAR: &str = "birth year";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What happened during a load, alongside the dataset itself.
#[derive(Debug, Clone)]
pub struct LoadSummary {
    pub rows_read: usize,
    pub rows_used: usize,
    pub rows_skipped: usize,
}

/// Load the full table for `city` from `data_dir`.
pub fn load_city(data_dir: &Path, city: City) -> Result<(Dataset, LoadSummary), DataError> {
    let path = data_dir.join(city.file_name());
    let file = File::open(&path).map_err(|source| DataError::Io {
        path: path.clone(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| DataError::Csv {
            path: path.clone(),
            source,
        })?
        .clone();
    let columns = build_header_map(&headers);

    let required = [
        (COL_START_TIME, "Start Time"),
        (COL_END_TIME, "End Time"),
        (COL_DURATION, "Trip Duration"),
        (COL_START_STATION, "Start Station"),
        (COL_END_STATION, "End Station"),
        (COL_USER_TYPE, "User Type"),
    ];
    for (key, display) in required {
        if !columns.contains_key(key) {
            return Err(DataError::MissingColumn {
                path,
                column: display,
            });
        }
    }

    let has_gender = columns.contains_key(COL_GENDER);
    let has_birth_year = columns.contains_key(COL_BIRTH_YEAR);

    let mut trips = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_skipped = 0usize;

    for (row_index, record) in reader.records().enumerate() {
        // header is line 1; data starts at line 2
        let line = row_index + 2;
        let record = record.map_err(|source| DataError::Csv {
            path: path.clone(),
            source,
        })?;
        rows_read += 1;

        match parse_trip(&record, &columns) {
            Ok(trip) => trips.push(trip),
            Err(message) => {
                rows_skipped += 1;
                log::warn!("{}: skipping line {}: {}", city, line, message);
            }
        }
    }

    let summary = LoadSummary {
        rows_read,
        rows_used: trips.len(),
        rows_skipped,
    };
    log::debug!(
        "loaded {}: {} rows used, {} skipped",
        city,
        summary.rows_used,
        summary.rows_skipped
    );

    let dataset = Dataset {
        city,
        trips,
        has_gender,
        has_birth_year,
    };
    Ok((dataset, summary))
}

/// Lowercased header name -> column index.
fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.trim().to_lowercase(), index))
        .collect()
}

fn parse_trip(record: &StringRecord, columns: &HashMap<String, usize>) -> Result<Trip, String> {
    let start_time = parse_timestamp(field(record, columns, COL_START_TIME)?, "Start Time")?;
    let end_time = parse_timestamp(field(record, columns, COL_END_TIME)?, "End Time")?;
    let duration_seconds = parse_seconds(field(record, columns, COL_DURATION)?)?;
    let start_station = non_empty(field(record, columns, COL_START_STATION)?, "Start Station")?;
    let end_station = non_empty(field(record, columns, COL_END_STATION)?, "End Station")?;
    let user_type = non_empty(field(record, columns, COL_USER_TYPE)?, "User Type")?;

    let gender = optional_field(record, columns, COL_GENDER).map(str::to_owned);
    let birth_year = match optional_field(record, columns, COL_BIRTH_YEAR) {
        Some(raw) => Some(parse_birth_year(raw)?),
        None => None,
    };

    Ok(Trip::new(
        start_time,
        end_time,
        duration_seconds,
        start_station,
        end_station,
        user_type,
        gender,
        birth_year,
    ))
}

fn field<'r>(
    record: &'r StringRecord,
    columns: &HashMap<String, usize>,
    name: &str,
) -> Result<&'r str, String> {
    columns
        .get(name)
        .and_then(|&index| record.get(index))
        .ok_or_else(|| format!("missing field {name:?}"))
}

/// Optional columns: absent column, short record, or blank cell all read as
/// "no value".
fn optional_field<'r>(
    record: &'r StringRecord,
    columns: &HashMap<String, usize>,
    name: &str,
) -> Option<&'r str> {
    columns
        .get(name)
        .and_then(|&index| record.get(index))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn parse_timestamp(raw: &str, what: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map_err(|e| format!("bad {what} {raw:?}: {e}"))
}

/// Durations appear as integers in some files and as floats ("321.0") in
/// others; accept both.
fn parse_seconds(raw: &str) -> Result<i64, String> {
    raw.parse::<f64>()
        .map(|value| value.round() as i64)
        .map_err(|e| format!("bad Trip Duration {raw:?}: {e}"))
}

/// Birth years are exported as floats ("1992.0").
fn parse_birth_year(raw: &str) -> Result<i32, String> {
    raw.parse::<f64>()
        .map(|value| value.round() as i32)
        .map_err(|e| format!("bad Birth Year {raw:?}: {e}"))
}

fn non_empty(raw: &str, what: &str) -> Result<String, String> {
    if raw.is_empty() {
        Err(format!("empty {what}"))
    } else {
        Ok(raw.to_owned())
    }
}

//! Most popular start/end stations and start-to-end trip pair.

use std::fmt::Write;

use crate::data::Dataset;
use crate::stats::mode_first;

use super::NO_DATA;

pub fn station_report(dataset: &Dataset) -> String {
    if dataset.is_empty() {
        return NO_DATA.to_string();
    }

    let mut out = String::new();

    if let Some(station) = mode_first(dataset.trips.iter().map(|t| t.start_station.as_str())) {
        writeln!(out, "The most commonly used start station is: {station}").unwrap();
    }

    if let Some(station) = mode_first(dataset.trips.iter().map(|t| t.end_station.as_str())) {
        writeln!(out, "The most commonly used end station is: {station}").unwrap();
    }

    if let Some(pair) = mode_first(
        dataset
            .trips
            .iter()
            .map(|t| format!("{} to {}", t.start_station, t.end_station)),
    ) {
        writeln!(
            out,
            "The most frequent combination of station trips is from {pair}"
        )
        .unwrap();
    }

    out.trim_end().to_string()
}

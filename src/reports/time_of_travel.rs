//! Most frequent times of travel: month, weekday and start hour.

use std::fmt::Write;

use crate::data::Dataset;
use crate::stats::{mode_first, twelve_hour_label};
use crate::vocab::{Day, FilterSelection, Month};

use super::NO_DATA;

/// Month and weekday lines appear only when that dimension is unfiltered;
/// reporting "most common month: June" after filtering to June says nothing.
pub fn time_of_travel_report(dataset: &Dataset, filters: &FilterSelection) -> String {
    if dataset.is_empty() {
        return NO_DATA.to_string();
    }

    let mut out = String::new();

    if filters.month.is_none() {
        if let Some(month) = mode_first(dataset.trips.iter().map(|t| t.month))
            .and_then(Month::from_number)
        {
            writeln!(out, "The most common month is: {month}").unwrap();
        }
    }

    if filters.day.is_none() {
        if let Some(day) =
            mode_first(dataset.trips.iter().map(|t| t.weekday)).and_then(Day::from_number)
        {
            writeln!(out, "The most common day is: {day}").unwrap();
        }
    }

    if let Some(hour) = mode_first(dataset.trips.iter().map(|t| t.hour)) {
        writeln!(
            out,
            "The most common start hour is: {}",
            twelve_hour_label(hour)
        )
        .unwrap();
    }

    out.trim_end().to_string()
}

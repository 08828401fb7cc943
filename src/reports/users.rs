//! User demographics: type, gender and birth-year breakdowns.
//!
//! Gender and birth year are per-city optional columns; their absence is
//! reported as information, never as an error.

use std::fmt::Write;

use crate::data::Dataset;
use crate::stats::{counts_in_order, mode_first};

use super::NO_DATA;

pub fn user_report(dataset: &Dataset) -> String {
    if dataset.is_empty() {
        return NO_DATA.to_string();
    }

    let mut out = String::new();

    writeln!(out, "The count of users by type:").unwrap();
    for (user_type, count) in counts_in_order(dataset.trips.iter().map(|t| t.user_type.as_str())) {
        writeln!(out, "  {user_type}: {count}").unwrap();
    }

    if dataset.has_gender {
        writeln!(out, "Breakdown of genders:").unwrap();
        let genders = dataset.trips.iter().filter_map(|t| t.gender.as_deref());
        for (gender, count) in counts_in_order(genders) {
            writeln!(out, "  {gender}: {count}").unwrap();
        }
    } else {
        writeln!(out, "There is no gender data for {}.", dataset.city).unwrap();
    }

    if dataset.has_birth_year {
        let years: Vec<i32> = dataset.trips.iter().filter_map(|t| t.birth_year).collect();
        if let (Some(earliest), Some(latest), Some(common)) = (
            years.iter().min().copied(),
            years.iter().max().copied(),
            mode_first(years.iter().copied()),
        ) {
            writeln!(out, "Earliest birth year: {earliest}").unwrap();
            writeln!(out, "Latest birth year: {latest}").unwrap();
            writeln!(out, "Most common birth year: {common}").unwrap();
        }
    } else {
        writeln!(out, "There is no birth year data for {}.", dataset.city).unwrap();
    }

    out.trim_end().to_string()
}

//! Total and mean trip duration, decomposed into calendar units.

use std::fmt::Write;

use crate::data::Dataset;
use crate::stats::DurationParts;

use super::NO_DATA;

pub fn trip_duration_report(dataset: &Dataset) -> String {
    if dataset.is_empty() {
        return NO_DATA.to_string();
    }

    let total: i64 = dataset.trips.iter().map(|t| t.duration_seconds).sum();
    // mean rounded to the nearest whole second
    let mean = (total as f64 / dataset.len() as f64).round() as i64;

    let mut out = String::new();
    writeln!(
        out,
        "The total trip duration is {}.",
        DurationParts::from_seconds(total).verbose()
    )
    .unwrap();
    writeln!(
        out,
        "The average trip duration is {}.",
        DurationParts::from_seconds(mean).compact()
    )
    .unwrap();

    out.trim_end().to_string()
}

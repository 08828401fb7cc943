//! The four descriptive-statistics reports.
//!
//! Each report renders to a `String` so the session loop owns all printing
//! and tests can assert on the exact output. Every report tolerates an empty
//! dataset by emitting the same defined "no data" line.

pub mod duration;
pub mod stations;
pub mod time_of_travel;
pub mod users;

pub use duration::trip_duration_report;
pub use stations::station_report;
pub use time_of_travel::time_of_travel_report;
pub use users::user_report;

/// Emitted by every report when the filtered dataset has no rows.
pub const NO_DATA: &str = "No trips match the selected filters.";

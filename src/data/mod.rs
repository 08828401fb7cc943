//! In-memory trip dataset and filtering.

pub mod loader;

pub use loader::{load_city, LoadSummary};

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::vocab::{City, Day, Month};

/// One bike rental. The derived fields (month/weekday/hour) are computed
/// once from the start timestamp at load time and never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_seconds: i64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    pub month: u32,
    /// Monday=0 .. Sunday=6.
    pub weekday: u32,
    pub hour: u32,
}

impl Trip {
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        duration_seconds: i64,
        start_station: String,
        end_station: String,
        user_type: String,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            month: start_time.month(),
            weekday: start_time.weekday().num_days_from_monday(),
            hour: start_time.hour(),
            start_time,
            end_time,
            duration_seconds,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
        }
    }
}

/// All loaded trips for one city, in file order. Filtering yields a derived
/// `Dataset`; the source file is never touched again.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub city: City,
    pub trips: Vec<Trip>,
    /// Whether the source file carried a Gender column at all. Distinct from
    /// every row having `gender: None`.
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Narrow to trips matching the month and/or day selection. `None` on
    /// either dimension means no filter.
    pub fn filter(&self, month: Option<Month>, day: Option<Day>) -> Dataset {
        let trips = self
            .trips
            .iter()
            .filter(|trip| month.is_none_or(|m| trip.month == m.number()))
            .filter(|trip| day.is_none_or(|d| trip.weekday == d.number()))
            .cloned()
            .collect();
        Dataset {
            city: self.city,
            trips,
            has_gender: self.has_gender,
            has_birth_year: self.has_birth_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trip(start: &str) -> Trip {
        let start_time = NaiveDate::parse_from_str(&start[..10], "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(
                start[11..13].parse().unwrap(),
                0,
                0,
            )
            .unwrap();
        Trip::new(
            start_time,
            start_time + chrono::Duration::seconds(600),
            600,
            "A St".into(),
            "B St".into(),
            "Subscriber".into(),
            None,
            None,
        )
    }

    fn dataset(trips: Vec<Trip>) -> Dataset {
        Dataset {
            city: City::Chicago,
            trips,
            has_gender: false,
            has_birth_year: false,
        }
    }

    #[test]
    fn derived_columns_come_from_start_time() {
        // 2017-01-02 was a Monday.
        let t = trip("2017-01-02 09");
        assert_eq!(t.month, 1);
        assert_eq!(t.weekday, 0);
        assert_eq!(t.hour, 9);

        // 2017-06-04 was a Sunday.
        let t = trip("2017-06-04 23");
        assert_eq!(t.month, 6);
        assert_eq!(t.weekday, 6);
        assert_eq!(t.hour, 23);
    }

    #[test]
    fn month_filter_keeps_only_matching_rows() {
        let ds = dataset(vec![
            trip("2017-01-02 09"),
            trip("2017-02-03 10"),
            trip("2017-02-10 11"),
        ]);
        let filtered = ds.filter(Some(Month::February), None);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.trips.iter().all(|t| t.month == 2));
    }

    #[test]
    fn day_filter_uses_monday_zero_numbering() {
        let ds = dataset(vec![
            trip("2017-01-02 09"), // Monday
            trip("2017-01-03 09"), // Tuesday
            trip("2017-01-09 09"), // Monday
        ]);
        let filtered = ds.filter(None, Some(Day::Monday));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.trips.iter().all(|t| t.weekday == 0));
    }

    #[test]
    fn no_filters_preserve_row_count() {
        let ds = dataset(vec![trip("2017-01-02 09"), trip("2017-03-05 14")]);
        assert_eq!(ds.filter(None, None).len(), ds.len());
    }

    #[test]
    fn combined_filter_can_be_empty() {
        let ds = dataset(vec![trip("2017-01-02 09")]); // January Monday
        let filtered = ds.filter(Some(Month::June), Some(Day::Friday));
        assert!(filtered.is_empty());
    }
}

//! Fixed vocabularies for interactive filter selection.
//!
//! Every value the user can choose — city, month, day of week, filter mode —
//! lives in one of these enums. Parsing is case-insensitive but requires the
//! full name: no numeric input, no prefix matching.

use std::fmt;

/// One of the three supported cities. Selects the CSV file to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYork, City::Washington];

    /// Case-insensitive full-name lookup ("new york", not "ny").
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "chicago" => Some(Self::Chicago),
            "new york" => Some(Self::NewYork),
            "washington" => Some(Self::Washington),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Chicago => "Chicago",
            Self::NewYork => "New York",
            Self::Washington => "Washington",
        }
    }

    /// File name of the city's dataset inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYork => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Months with trip data: January through June only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "january" => Some(Self::January),
            "february" => Some(Self::February),
            "march" => Some(Self::March),
            "april" => Some(Self::April),
            "may" => Some(Self::May),
            "june" => Some(Self::June),
            _ => None,
        }
    }

    /// Calendar month number, January=1.
    pub fn number(&self) -> u32 {
        match self {
            Self::January => 1,
            Self::February => 2,
            Self::March => 3,
            Self::April => 4,
            Self::May => 5,
            Self::June => 6,
        }
    }

    /// Map a derived month number back to a name, if it is in range.
    pub fn from_number(n: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.number() == n)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Day of week. Numbering follows the derived column: Monday=0 .. Sunday=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "monday" => Some(Self::Monday),
            "tuesday" => Some(Self::Tuesday),
            "wednesday" => Some(Self::Wednesday),
            "thursday" => Some(Self::Thursday),
            "friday" => Some(Self::Friday),
            "saturday" => Some(Self::Saturday),
            "sunday" => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Weekday number, Monday=0.
    pub fn number(&self) -> u32 {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }

    pub fn from_number(n: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.number() == n)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which dimensions the user wants to filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Month,
    Day,
    Both,
    None,
}

impl FilterMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "month" => Some(Self::Month),
            "day" => Some(Self::Day),
            "both" => Some(Self::Both),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    pub fn wants_month(&self) -> bool {
        matches!(self, Self::Month | Self::Both)
    }

    pub fn wants_day(&self) -> bool {
        matches!(self, Self::Day | Self::Both)
    }
}

/// A validated filter triple. `None` means the "all" sentinel: no filter on
/// that dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Day>,
}

impl FilterSelection {
    pub fn is_filtered(&self) -> bool {
        self.month.is_some() || self.day.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_parse_normalizes_casing() {
        for input in ["Chicago", "chicago", "CHICAGO", "  cHiCaGo "] {
            assert_eq!(City::parse(input), Some(City::Chicago));
        }
        for input in ["New York", "new york", "NEW YORK"] {
            assert_eq!(City::parse(input), Some(City::NewYork));
        }
        assert_eq!(City::parse("washington"), Some(City::Washington));
    }

    #[test]
    fn city_parse_rejects_partial_and_unknown() {
        assert_eq!(City::parse("chi"), None);
        assert_eq!(City::parse("new"), None);
        assert_eq!(City::parse("boston"), None);
        assert_eq!(City::parse(""), None);
    }

    #[test]
    fn month_parse_full_names_only() {
        assert_eq!(Month::parse("January"), Some(Month::January));
        assert_eq!(Month::parse("JUNE"), Some(Month::June));
        assert_eq!(Month::parse("jan"), None);
        assert_eq!(Month::parse("july"), None);
        assert_eq!(Month::parse("1"), None);
    }

    #[test]
    fn month_numbers_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::from_number(month.number()), Some(month));
        }
        assert_eq!(Month::from_number(7), None);
        assert_eq!(Month::from_number(0), None);
    }

    #[test]
    fn day_numbering_is_monday_zero() {
        assert_eq!(Day::Monday.number(), 0);
        assert_eq!(Day::Sunday.number(), 6);
        assert_eq!(Day::parse("WEDNESDAY"), Some(Day::Wednesday));
        assert_eq!(Day::parse("wed"), None);
        assert_eq!(Day::parse("3"), None);
    }

    #[test]
    fn filter_mode_full_names() {
        assert_eq!(FilterMode::parse("both"), Some(FilterMode::Both));
        assert_eq!(FilterMode::parse("None"), Some(FilterMode::None));
        assert_eq!(FilterMode::parse("m"), None);
        assert!(FilterMode::Both.wants_month());
        assert!(FilterMode::Both.wants_day());
        assert!(!FilterMode::None.wants_month());
        assert!(!FilterMode::Month.wants_day());
    }
}

//! Small aggregate helpers shared by the report generators.

use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value in `values`. Ties are broken by the earliest first
/// occurrence in the input order, which keeps every report deterministic.
/// Returns `None` for empty input.
pub fn mode_first<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (index, value) in values.into_iter().enumerate() {
        let entry = counts.entry(value).or_insert((0, index));
        entry.0 += 1;
    }
    counts
        .into_iter()
        // max count wins; on equal counts the smaller first-seen index wins
        .max_by(|(_, (ca, ia)), (_, (cb, ib))| ca.cmp(cb).then(ib.cmp(ia)))
        .map(|(value, _)| value)
}

/// Count occurrences, returning `(value, count)` pairs ordered by first
/// appearance in the input rather than by frequency.
pub fn counts_in_order<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut order: Vec<T> = Vec::new();
    let mut counts: HashMap<T, usize> = HashMap::new();
    for value in values {
        if !counts.contains_key(&value) {
            order.push(value.clone());
        }
        *counts.entry(value).or_insert(0) += 1;
    }
    order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            (value, count)
        })
        .collect()
}

/// Seconds decomposed into days/hours/minutes/seconds by successive
/// division-with-remainder. One chain serves both the total and the mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl DurationParts {
    pub fn from_seconds(total: i64) -> Self {
        let (minutes, seconds) = (total / 60, total % 60);
        let (hours, minutes) = (minutes / 60, minutes % 60);
        let (days, hours) = (hours / 24, hours % 24);
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Full rendering: "D days, H hours, M minutes and S seconds".
    pub fn verbose(&self) -> String {
        format!(
            "{} days, {} hours, {} minutes and {} seconds",
            self.days, self.hours, self.minutes, self.seconds
        )
    }

    /// Rendering that omits leading zero units, so a short mean reads
    /// "5 minutes and 3 seconds" rather than "0 days, 0 hours, ...".
    pub fn compact(&self) -> String {
        if self.days > 0 {
            self.verbose()
        } else if self.hours > 0 {
            format!(
                "{} hours, {} minutes and {} seconds",
                self.hours, self.minutes, self.seconds
            )
        } else {
            format!("{} minutes and {} seconds", self.minutes, self.seconds)
        }
    }
}

/// Hour-of-day to 12-hour display, matching the original tool exactly:
/// 13..=23 become (hour-12) "pm", everything else keeps its value with "am".
/// Hour 12 therefore reads "12am"; that quirk is pinned by tests downstream.
pub fn twelve_hour_label(hour: u32) -> String {
    if hour > 12 {
        format!("{}pm", hour - 12)
    } else {
        format!("{}am", hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_first_picks_most_frequent() {
        assert_eq!(mode_first([1, 2, 2, 3, 2]), Some(2));
        assert_eq!(mode_first(["a", "b", "b"]), Some("b"));
    }

    #[test]
    fn mode_first_breaks_ties_by_row_order() {
        // 3 and 1 both appear twice; 3 appears first.
        assert_eq!(mode_first([3, 1, 3, 1, 2]), Some(3));
        assert_eq!(mode_first(["x", "y"]), Some("x"));
    }

    #[test]
    fn mode_first_empty_is_none() {
        assert_eq!(mode_first(Vec::<i32>::new()), None);
    }

    #[test]
    fn counts_keep_first_seen_order() {
        let counts = counts_in_order(["Subscriber", "Customer", "Subscriber"]);
        assert_eq!(counts, vec![("Subscriber", 2), ("Customer", 1)]);
    }

    #[test]
    fn decomposition_uses_divmod_chain() {
        let parts = DurationParts::from_seconds(90061);
        assert_eq!(
            parts,
            DurationParts {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
        assert_eq!(DurationParts::from_seconds(0).verbose(), "0 days, 0 hours, 0 minutes and 0 seconds");
    }

    #[test]
    fn compact_drops_leading_zero_units() {
        assert_eq!(DurationParts::from_seconds(303).compact(), "5 minutes and 3 seconds");
        assert_eq!(
            DurationParts::from_seconds(3723).compact(),
            "1 hours, 2 minutes and 3 seconds"
        );
        assert_eq!(
            DurationParts::from_seconds(90061).compact(),
            "1 days, 1 hours, 1 minutes and 1 seconds"
        );
    }

    #[test]
    fn twelve_hour_boundaries_match_legacy_mapping() {
        assert_eq!(twelve_hour_label(0), "0am");
        assert_eq!(twelve_hour_label(12), "12am");
        assert_eq!(twelve_hour_label(13), "1pm");
        assert_eq!(twelve_hour_label(23), "11pm");
    }
}

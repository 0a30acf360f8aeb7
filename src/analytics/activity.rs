//! Day-of-week and month activity maps, and the weekday × hour heatmap.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::{AuthorFilter, filtered, ranked_counts};
use crate::transcript::Transcript;

/// Counts the records in scope per weekday name, descending by count.
///
/// Only weekdays with at least one message appear; callers must not assume
/// all 7 are present. Ties keep their first-encounter order.
pub fn weekly_activity(filter: &AuthorFilter, transcript: &Transcript) -> Vec<(String, usize)> {
    ranked_counts(
        filtered(filter, transcript)
            .filter_map(|r| r.calendar.as_ref())
            .map(|c| c.day_name.clone()),
    )
}

/// Counts the records in scope per month name, descending by count.
pub fn monthly_activity(filter: &AuthorFilter, transcript: &Transcript) -> Vec<(String, usize)> {
    ranked_counts(
        filtered(filter, transcript)
            .filter_map(|r| r.calendar.as_ref())
            .map(|c| c.month_name.clone()),
    )
}

/// Weekday × hour-bucket message counts, 0-filled.
///
/// Rows are the weekdays present, in Monday-first calendar order; columns
/// are the hour buckets present, in hour-of-day order. Every cell of the
/// resulting grid is defined: combinations with no messages hold 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    /// Row labels: weekday names, Monday first, absent days omitted.
    pub days: Vec<String>,
    /// Column labels: hour-bucket labels, hour order, absent buckets omitted.
    pub buckets: Vec<String>,
    /// `counts[row][column]` message counts, 0 where no messages fall.
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Looks up the count for a day/bucket label pair.
    pub fn get(&self, day: &str, bucket: &str) -> Option<usize> {
        let row = self.days.iter().position(|d| d == day)?;
        let col = self.buckets.iter().position(|b| b == bucket)?;
        Some(self.counts[row][col])
    }

    /// Returns `true` if no record in scope had a timestamp.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Builds the weekday × hour-bucket heatmap for the records in scope.
///
/// # Example
///
/// ```
/// use chatlens::analytics::{AuthorFilter, activity_heatmap};
/// use chatlens::{Dialect, TranscriptParser};
///
/// // 01/01/23 is a Sunday.
/// let transcript = TranscriptParser::new(Dialect::TwentyFourHour)
///     .parse_str("01/01/23, 10:30 - Alice: hi\n01/01/23, 10:45 - Bob: hello");
///
/// let heatmap = activity_heatmap(&AuthorFilter::Overall, &transcript);
/// assert_eq!(heatmap.get("Sunday", "10-11"), Some(2));
/// ```
pub fn activity_heatmap(filter: &AuthorFilter, transcript: &Transcript) -> Heatmap {
    // Keyed by (weekday index, hour) so labels come out in calendar order.
    let mut cells: BTreeMap<(u32, u32), usize> = BTreeMap::new();
    let mut day_names: BTreeMap<u32, String> = BTreeMap::new();
    let mut bucket_names: BTreeMap<u32, String> = BTreeMap::new();

    for record in filtered(filter, transcript) {
        if let (Some(ts), Some(calendar)) = (record.timestamp, &record.calendar) {
            let day = ts.weekday().num_days_from_monday();
            day_names.entry(day).or_insert_with(|| calendar.day_name.clone());
            bucket_names
                .entry(calendar.hour)
                .or_insert_with(|| calendar.hour_bucket.clone());
            *cells.entry((day, calendar.hour)).or_insert(0) += 1;
        }
    }

    let days: Vec<String> = day_names.values().cloned().collect();
    let buckets: Vec<String> = bucket_names.values().cloned().collect();
    let counts = day_names
        .keys()
        .map(|day| {
            bucket_names
                .keys()
                .map(|hour| cells.get(&(*day, *hour)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    Heatmap {
        days,
        buckets,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use crate::parser::TranscriptParser;
    use crate::record::Record;

    fn transcript() -> Transcript {
        // 01/01/23 is a Sunday, 02/01/23 a Monday.
        TranscriptParser::new(Dialect::TwentyFourHour).parse_str(
            "01/01/23, 10:30 - Alice: a\n\
             01/01/23, 10:40 - Bob: b\n\
             01/01/23, 23:10 - Alice: c\n\
             02/01/23, 00:05 - Alice: d\n\
             02/01/23, 10:00 - Bob: e",
        )
    }

    #[test]
    fn test_weekly_activity_descending() {
        let weekly = weekly_activity(&AuthorFilter::Overall, &transcript());
        assert_eq!(
            weekly,
            vec![("Sunday".to_string(), 3), ("Monday".to_string(), 2)]
        );
    }

    #[test]
    fn test_monthly_activity() {
        let monthly = monthly_activity(&AuthorFilter::Overall, &transcript());
        assert_eq!(monthly, vec![("January".to_string(), 5)]);
    }

    #[test]
    fn test_absent_days_absent_from_map() {
        let weekly = weekly_activity(&AuthorFilter::Overall, &transcript());
        assert_eq!(weekly.len(), 2);
        assert!(!weekly.iter().any(|(d, _)| d == "Tuesday"));
    }

    #[test]
    fn test_heatmap_cells() {
        let heatmap = activity_heatmap(&AuthorFilter::Overall, &transcript());

        assert_eq!(heatmap.get("Sunday", "10-11"), Some(2));
        assert_eq!(heatmap.get("Sunday", "23-00"), Some(1));
        assert_eq!(heatmap.get("Monday", "00-1"), Some(1));
        // Defined but empty cell is 0, not missing.
        assert_eq!(heatmap.get("Monday", "23-00"), Some(0));
        // Absent labels are not defined at all.
        assert_eq!(heatmap.get("Tuesday", "10-11"), None);
    }

    #[test]
    fn test_heatmap_label_order() {
        let heatmap = activity_heatmap(&AuthorFilter::Overall, &transcript());
        assert_eq!(heatmap.days, vec!["Monday", "Sunday"]);
        assert_eq!(heatmap.buckets, vec!["00-1", "10-11", "23-00"]);
    }

    #[test]
    fn test_heatmap_skips_null_timestamps() {
        let transcript = Transcript::new(vec![Record::notification("Bob left")], vec![]);
        let heatmap = activity_heatmap(&AuthorFilter::Overall, &transcript);
        assert!(heatmap.is_empty());
    }

    #[test]
    fn test_empty_transcript() {
        assert!(weekly_activity(&AuthorFilter::Overall, &Transcript::default()).is_empty());
        assert!(monthly_activity(&AuthorFilter::Overall, &Transcript::default()).is_empty());
        assert!(activity_heatmap(&AuthorFilter::Overall, &Transcript::default()).is_empty());
    }
}

//! Chronological message-count timelines.
//!
//! Records without a parsed timestamp carry no calendar fields and are
//! skipped by both timelines; they never cause a failure.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{AuthorFilter, filtered};
use crate::transcript::Transcript;

/// Message count for one `(year, month)` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    /// Chart label, `"<MonthName>-<Year>"` (e.g. `"January-2023"`).
    pub label: String,
    /// Four-digit year.
    pub year: i32,
    /// Month number, 1-12.
    pub month_number: u32,
    /// Records in this month.
    pub messages: usize,
}

/// Message count for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    /// The calendar date.
    pub date: NaiveDate,
    /// Records on this date.
    pub messages: usize,
}

/// Groups the records in scope by `(year, month)`, chronologically.
///
/// The grouping key is the numeric pair, not the label: grouping by month
/// name alone would misorder same-named months across years.
///
/// # Example
///
/// ```
/// use chatlens::analytics::{AuthorFilter, monthly_timeline};
/// use chatlens::{Dialect, TranscriptParser};
///
/// let transcript = TranscriptParser::new(Dialect::TwentyFourHour)
///     .parse_str("01/01/23, 10:30 - Alice: hi\n05/02/23, 11:00 - Bob: hello");
///
/// let timeline = monthly_timeline(&AuthorFilter::Overall, &transcript);
/// assert_eq!(timeline[0].label, "January-2023");
/// assert_eq!(timeline[1].label, "February-2023");
/// ```
pub fn monthly_timeline(filter: &AuthorFilter, transcript: &Transcript) -> Vec<MonthlyCount> {
    let mut groups: BTreeMap<(i32, u32), (String, usize)> = BTreeMap::new();

    for record in filtered(filter, transcript) {
        if let Some(calendar) = &record.calendar {
            let entry = groups
                .entry((calendar.year, calendar.month_number))
                .or_insert_with(|| (calendar.month_name.clone(), 0));
            entry.1 += 1;
        }
    }

    groups
        .into_iter()
        .map(|((year, month_number), (month_name, messages))| MonthlyCount {
            label: format!("{month_name}-{year}"),
            year,
            month_number,
            messages,
        })
        .collect()
}

/// Counts the records in scope per calendar date, chronologically.
///
/// One row per date present; dates with no messages do not appear.
pub fn daily_timeline(filter: &AuthorFilter, transcript: &Transcript) -> Vec<DailyCount> {
    let mut groups: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for record in filtered(filter, transcript) {
        if let Some(calendar) = &record.calendar {
            *groups.entry(calendar.date).or_insert(0) += 1;
        }
    }

    groups
        .into_iter()
        .map(|(date, messages)| DailyCount { date, messages })
        .collect()
}

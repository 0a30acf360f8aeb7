//! Descriptive analytics over a parsed [`Transcript`].
//!
//! Every operation here is a pure, stateless function over an immutable
//! transcript, independently scoped by an [`AuthorFilter`]. Nothing mutates
//! the transcript; the sentiment classifier returns its labels in a separate
//! structure rather than writing them into records.
//!
//! # Operations
//!
//! | Function | Output |
//! |----------|--------|
//! | [`fetch_stats`] | message/word/media/link counts |
//! | [`most_busy_users`] | descending author ranking + percentage table |
//! | [`word_frequency_field`] | bag-of-words blob for word-cloud rendering |
//! | [`most_common_words`] | top-20 (word, count) pairs |
//! | [`emoji_frequency`] | every distinct emoji with its count |
//! | [`monthly_timeline`] / [`daily_timeline`] | chronological message counts |
//! | [`weekly_activity`] / [`monthly_activity`] | day-name / month-name counts |
//! | [`activity_heatmap`] | weekday × hour-bucket grid |
//! | [`sentiment_analysis`] | per-record labels + per-label counts |
//!
//! # Example
//!
//! ```
//! use chatlens::analytics::{AuthorFilter, fetch_stats};
//! use chatlens::{Dialect, TranscriptParser};
//!
//! let transcript = TranscriptParser::new(Dialect::TwelveHour)
//!     .parse_str("01/01/23, 10:30 am - Alice: Hello there");
//!
//! let stats = fetch_stats(&AuthorFilter::Overall, &transcript);
//! assert_eq!(stats.messages, 1);
//! assert_eq!(stats.words, 2);
//! ```

mod activity;
mod emoji;
mod sentiment;
mod stats;
mod timeline;
mod users;
mod words;

pub use activity::{Heatmap, activity_heatmap, monthly_activity, weekly_activity};
pub use emoji::emoji_frequency;
pub use sentiment::{
    NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, Sentiment, SentimentCounts, SentimentReport, classify,
    sentiment_analysis,
};
pub use stats::{Stats, fetch_stats};
pub use timeline::{DailyCount, MonthlyCount, daily_timeline, monthly_timeline};
pub use users::{UserShare, most_busy_users};
pub use words::{MOST_COMMON_LIMIT, most_common_words, word_frequency_field};

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::transcript::Transcript;

/// Scope selector shared by every analytics operation.
///
/// `Overall` covers the whole transcript; `Author` restricts to records
/// whose author equals the name exactly. An author not present in the
/// transcript yields empty results, not an error, and notification rows
/// never match a real author name.
///
/// # Example
///
/// ```
/// use chatlens::analytics::AuthorFilter;
///
/// let filter = AuthorFilter::from("Overall");
/// assert!(filter.is_overall());
///
/// let filter = AuthorFilter::from("Alice");
/// assert_eq!(filter.to_string(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorFilter {
    /// No restriction: every record participates.
    Overall,
    /// Restrict to records from this exact author.
    Author(String),
}

impl AuthorFilter {
    /// Creates an author-scoped filter.
    pub fn author(name: impl Into<String>) -> Self {
        AuthorFilter::Author(name.into())
    }

    /// Returns `true` for the unrestricted filter.
    pub fn is_overall(&self) -> bool {
        matches!(self, AuthorFilter::Overall)
    }

    /// Returns `true` if `record` is in scope.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            AuthorFilter::Overall => true,
            AuthorFilter::Author(name) => record.author == *name,
        }
    }
}

impl From<&str> for AuthorFilter {
    fn from(s: &str) -> Self {
        if s == "Overall" {
            AuthorFilter::Overall
        } else {
            AuthorFilter::Author(s.to_string())
        }
    }
}

impl From<String> for AuthorFilter {
    fn from(s: String) -> Self {
        AuthorFilter::from(s.as_str())
    }
}

impl std::fmt::Display for AuthorFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthorFilter::Overall => write!(f, "Overall"),
            AuthorFilter::Author(name) => write!(f, "{name}"),
        }
    }
}

/// Iterates over the records in scope, in transcript order.
fn filtered<'a>(
    filter: &'a AuthorFilter,
    transcript: &'a Transcript,
) -> impl Iterator<Item = &'a Record> {
    transcript.iter().filter(move |r| filter.matches(r))
}

/// Counts values in first-encounter order, then sorts descending by count.
///
/// The sort is stable, so ties keep their first-encounter order — the
/// ordering rule every frequency table here shares.
fn ranked_counts<I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: std::collections::HashMap<String, usize> = std::collections::HashMap::new();

    for value in values {
        if !counts.contains_key(&value) {
            order.push(value.clone());
        }
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            (value, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

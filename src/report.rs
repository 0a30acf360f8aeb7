//! Aggregated analysis report and its writers.
//!
//! [`AnalysisReport`] bundles every analytics operation's output for one
//! `(transcript, filter)` pair into a single serializable structure — the
//! shape handed to an external rendering layer (charts, tables). The
//! writers are thin: JSON for the whole report, CSV for the tabular parts.
//!
//! # Example
//!
//! ```
//! use chatlens::analytics::AuthorFilter;
//! use chatlens::report::AnalysisReport;
//! use chatlens::{Dialect, StopWords, TranscriptParser};
//!
//! let transcript = TranscriptParser::new(Dialect::TwelveHour)
//!     .parse_str("01/01/23, 10:30 am - Alice: Hello there");
//!
//! let report = AnalysisReport::build(
//!     &AuthorFilter::Overall,
//!     &transcript,
//!     &StopWords::default_list(),
//! );
//! assert_eq!(report.stats.messages, 1);
//! ```

use serde::Serialize;

use crate::analytics::{
    AuthorFilter, DailyCount, Heatmap, MonthlyCount, SentimentCounts, Stats, UserShare,
    activity_heatmap, daily_timeline, emoji_frequency, fetch_stats, monthly_activity,
    monthly_timeline, most_busy_users, most_common_words, sentiment_analysis, weekly_activity,
    word_frequency_field,
};
use crate::stopwords::StopWords;
use crate::transcript::Transcript;

#[cfg(any(feature = "json-output", feature = "csv-output"))]
use crate::error::Result;

/// Every analytics result for one `(transcript, filter)` pair.
///
/// `busy_users` and `user_shares` are Overall-scoped by definition and are
/// computed over the whole transcript regardless of `filter`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// The filter the scoped sections were computed under.
    pub filter: String,
    /// Lines the parser dropped while building the transcript.
    pub skipped_lines: usize,
    /// Message/word/media/link counts.
    pub stats: Stats,
    /// Descending (author, message count) ranking, whole transcript.
    pub busy_users: Vec<(String, usize)>,
    /// Percentage-of-total per author, whole transcript.
    pub user_shares: Vec<UserShare>,
    /// Bag-of-words blob for word-cloud rendering.
    pub word_cloud_field: String,
    /// Top-20 (word, count) pairs.
    pub common_words: Vec<(String, usize)>,
    /// Every distinct emoji with its count, descending.
    pub emoji: Vec<(String, usize)>,
    /// Chronological per-month counts.
    pub monthly_timeline: Vec<MonthlyCount>,
    /// Chronological per-date counts.
    pub daily_timeline: Vec<DailyCount>,
    /// Weekday-name counts, descending.
    pub weekly_activity: Vec<(String, usize)>,
    /// Month-name counts, descending.
    pub monthly_activity: Vec<(String, usize)>,
    /// Weekday × hour-bucket grid.
    pub heatmap: Heatmap,
    /// Message counts per sentiment label.
    pub sentiment: SentimentCounts,
}

impl AnalysisReport {
    /// Runs the full analytics suite and collects the results.
    pub fn build(filter: &AuthorFilter, transcript: &Transcript, stop_words: &StopWords) -> Self {
        let (busy_users, user_shares) = most_busy_users(transcript);

        Self {
            filter: filter.to_string(),
            skipped_lines: transcript.skipped().len(),
            stats: fetch_stats(filter, transcript),
            busy_users,
            user_shares,
            word_cloud_field: word_frequency_field(filter, transcript, stop_words),
            common_words: most_common_words(filter, transcript, stop_words),
            emoji: emoji_frequency(filter, transcript),
            monthly_timeline: monthly_timeline(filter, transcript),
            daily_timeline: daily_timeline(filter, transcript),
            weekly_activity: weekly_activity(filter, transcript),
            monthly_activity: monthly_activity(filter, transcript),
            heatmap: activity_heatmap(filter, transcript),
            sentiment: sentiment_analysis(filter, transcript).counts,
        }
    }

    /// Serializes the whole report as pretty-printed JSON.
    #[cfg(feature = "json-output")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the whole report as JSON to `path`.
    #[cfg(feature = "json-output")]
    pub fn write_json(&self, path: &std::path::Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Writes the user-share table as CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Author`, `Messages`, `Percentage`
/// - Encoding: UTF-8
#[cfg(feature = "csv-output")]
pub fn write_busy_users_csv(report: &AnalysisReport, path: &std::path::Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);

    writer.write_record(["Author", "Messages", "Percentage"])?;
    for ((author, count), share) in report.busy_users.iter().zip(&report.user_shares) {
        writer.write_record([
            author.clone(),
            count.to_string(),
            share.percentage.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the daily timeline as CSV with semicolon delimiter.
///
/// Columns: `Date` (ISO 8601), `Messages`.
#[cfg(feature = "csv-output")]
pub fn write_daily_timeline_csv(report: &AnalysisReport, path: &std::path::Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);

    writer.write_record(["Date", "Messages"])?;
    for day in &report.daily_timeline {
        writer.write_record([day.date.to_string(), day.messages.to_string()])?;
    }

    writer.flush()?;
    Ok(())
}

//! # Chatlens
//!
//! A Rust library for parsing exported WhatsApp chat transcripts into
//! structured records and computing descriptive analytics over them.
//!
//! ## Overview
//!
//! Chatlens has two halves:
//!
//! - **Transcript parser** — converts raw line-oriented chat text into an
//!   ordered [`Transcript`] of typed [`Record`]s (timestamp, author,
//!   message) with derived calendar fields, under one of two timestamp
//!   [`Dialect`]s (12-hour / 24-hour).
//! - **Analytics engine** — pure query functions over the parsed record
//!   set, each independently scoped by an
//!   [`AuthorFilter`](analytics::AuthorFilter): aggregate counts,
//!   active-user ranking, word and emoji frequency, timelines, activity
//!   maps, and lexicon-based sentiment classification.
//!
//! Data flows one direction: raw text → parser → [`Transcript`] →
//! analytics → scalar/tabular results for an external rendering layer.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::analytics::{AuthorFilter, fetch_stats, most_busy_users};
//! use chatlens::{Dialect, TranscriptParser};
//!
//! let raw = "01/01/23, 10:30 am - Alice: Hello there\n\
//!            01/01/23, 10:31 am - Bob: hi!";
//!
//! let transcript = TranscriptParser::new(Dialect::TwelveHour).parse_str(raw);
//!
//! let stats = fetch_stats(&AuthorFilter::Overall, &transcript);
//! assert_eq!(stats.messages, 2);
//!
//! let (ranking, shares) = most_busy_users(&transcript);
//! assert_eq!(ranking.len(), 2);
//! assert_eq!(shares[0].percentage, 50.0);
//! ```
//!
//! Parsing is total: malformed lines are skipped with a diagnostic (see
//! [`Transcript::skipped`]), never an error. Records whose timestamp fails
//! to parse are kept without calendar fields and skipped by the timeline
//! operations.
//!
//! ## Module Structure
//!
//! - [`parser`] — [`TranscriptParser`], the line-oriented parser
//! - [`dialect`] — [`Dialect`], the 12-hour/24-hour timestamp grammars
//! - [`record`] — [`Record`] and its derived [`Calendar`](record::Calendar)
//! - [`transcript`] — [`Transcript`], the parsed record set
//! - [`analytics`] — the query functions and [`AuthorFilter`](analytics::AuthorFilter)
//! - [`stopwords`] — [`StopWords`], shared by the word-frequency operations
//! - [`report`] — [`AnalysisReport`](report::AnalysisReport) aggregation and writers
//! - [`error`] — [`ChatlensError`], [`Result`]
//! - [`prelude`] — convenient re-exports

pub mod analytics;
#[cfg(feature = "cli")]
pub mod cli;
pub mod dialect;
pub mod error;
pub mod parser;
pub mod record;
pub mod report;
pub mod stopwords;
pub mod transcript;

// Re-export the main types at the crate root for convenience
pub use dialect::Dialect;
pub use error::{ChatlensError, Result};
pub use parser::TranscriptParser;
pub use record::Record;
pub use stopwords::StopWords;
pub use transcript::Transcript;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{Dialect, Record, StopWords, Transcript, TranscriptParser};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Analytics
    pub use crate::analytics::{
        AuthorFilter, Heatmap, Sentiment, SentimentReport, Stats, UserShare, activity_heatmap,
        daily_timeline, emoji_frequency, fetch_stats, monthly_activity, monthly_timeline,
        most_busy_users, most_common_words, sentiment_analysis, weekly_activity,
        word_frequency_field,
    };

    // Report aggregation
    pub use crate::report::AnalysisReport;

    // Record sentinels
    pub use crate::record::{GROUP_NOTIFICATION, MEDIA_OMITTED};
}

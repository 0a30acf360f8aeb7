//! Lexicon-based sentiment classification.
//!
//! Each message gets a compound polarity score in [-1, 1] from the VADER
//! lexicon/rule scorer (negation, intensifiers, punctuation emphasis, emoji
//! and slang), then a three-way label via [`classify`]. The labels are
//! returned alongside the counts in a [`SentimentReport`]; records are never
//! mutated.

use serde::{Deserialize, Serialize};
use vader_sentiment::SentimentIntensityAnalyzer;

use super::{AuthorFilter, filtered};
use crate::transcript::Transcript;

/// Compound scores strictly above this are Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound scores strictly below this are Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Neutral => write!(f, "Neutral"),
            Sentiment::Negative => write!(f, "Negative"),
        }
    }
}

/// Classifies a compound polarity score.
///
/// The 0.05 boundaries are exclusive on both sides: a score of exactly
/// ±0.05 is Neutral. These exact thresholds are load-bearing for
/// compatibility with existing consumers.
pub fn classify(compound: f64) -> Sentiment {
    if compound > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if compound < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Message counts per label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    /// Total labelled messages.
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Per-record labels paired with their aggregate counts.
///
/// `labels[i]` belongs to the i-th record in scope, in transcript order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentimentReport {
    pub labels: Vec<Sentiment>,
    pub counts: SentimentCounts,
}

/// Scores and classifies every message in scope.
///
/// The scorer is constructed fresh per invocation; nothing persists across
/// calls and the transcript is left untouched.
///
/// # Example
///
/// ```
/// use chatlens::analytics::{AuthorFilter, Sentiment, sentiment_analysis};
/// use chatlens::{Record, Transcript};
///
/// let transcript = Transcript::new(
///     vec![Record::new("Alice", "I love this, great work!")],
///     vec![],
/// );
///
/// let report = sentiment_analysis(&AuthorFilter::Overall, &transcript);
/// assert_eq!(report.labels, vec![Sentiment::Positive]);
/// assert_eq!(report.counts.positive, 1);
/// ```
pub fn sentiment_analysis(filter: &AuthorFilter, transcript: &Transcript) -> SentimentReport {
    let analyzer = SentimentIntensityAnalyzer::new();

    let mut report = SentimentReport::default();
    for record in filtered(filter, transcript) {
        let scores = analyzer.polarity_scores(&record.message);
        let compound = scores.get("compound").copied().unwrap_or(0.0);
        let label = classify(compound);

        match label {
            Sentiment::Positive => report.counts.positive += 1,
            Sentiment::Neutral => report.counts.neutral += 1,
            Sentiment::Negative => report.counts.negative += 1,
        }
        report.labels.push(label);
    }
    report
}

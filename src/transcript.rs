//! The parsed record set for one transcript.
//!
//! A [`Transcript`] is the ordered collection of [`Record`]s parsed from one
//! chat export, together with diagnostics for lines the parser had to skip.
//! It is built once by [`TranscriptParser`](crate::parser::TranscriptParser)
//! and never structurally mutated afterwards; every analytics function takes
//! it by shared reference.

use serde::Serialize;

use crate::record::{GROUP_NOTIFICATION, Record};

/// Why the parser skipped a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The line was empty or whitespace-only.
    EmptyLine,
    /// The line matched neither the dialect grammar nor the `" - "`
    /// notification split.
    NoSeparator,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::EmptyLine => write!(f, "empty line"),
            SkipReason::NoSeparator => write!(f, "no ' - ' separator"),
        }
    }
}

/// Diagnostic for one dropped input line.
///
/// Skipped lines are expected during normal operation: real transcripts
/// contain multi-line messages and edited/system text that matches neither
/// grammar. They are reported, never fatal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number in the raw input.
    pub line_number: usize,
    /// The offending line content, verbatim.
    pub content: String,
    /// The failure cause.
    pub reason: SkipReason,
}

/// The full ordered collection of records parsed from one transcript.
///
/// Insertion order equals transcript line order. Owned exclusively by the
/// caller for the duration of one analysis session; there is no cross-session
/// sharing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transcript {
    records: Vec<Record>,
    skipped: Vec<SkippedLine>,
}

impl Transcript {
    /// Creates a transcript from parsed records and skip diagnostics.
    pub fn new(records: Vec<Record>, skipped: Vec<SkippedLine>) -> Self {
        Self { records, skipped }
    }

    /// Returns all records in transcript line order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns diagnostics for the lines the parser dropped.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no line produced a record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records in transcript line order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Returns the sorted, de-duplicated author list, excluding
    /// [`GROUP_NOTIFICATION`].
    ///
    /// This is the list an external selector offers next to `"Overall"`.
    pub fn authors(&self) -> Vec<String> {
        let mut authors: Vec<String> = self
            .records
            .iter()
            .filter(|r| r.author != GROUP_NOTIFICATION)
            .map(|r| r.author.clone())
            .collect();
        authors.sort();
        authors.dedup();
        authors
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

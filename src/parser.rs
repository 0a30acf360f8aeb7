//! Line-oriented transcript parser.
//!
//! [`TranscriptParser`] converts a raw WhatsApp export into a
//! [`Transcript`] under a [`Dialect`] selected once per parse.
//!
//! Each line is processed independently, in order:
//!
//! 1. Match against the dialect grammar
//!    `<date>, <time> - <author>: <message>`. On match, emit a record with
//!    the captured author and message; the timestamp is parsed with the
//!    dialect's format string, and an invalid calendar date yields a record
//!    with no timestamp rather than an error.
//! 2. On non-match, split once on the literal `" - "`. On success, emit a
//!    [`GROUP_NOTIFICATION`](crate::record::GROUP_NOTIFICATION) record with
//!    the remainder as its message. The left part carries no format tag and
//!    is never parsed, so notification records have no timestamp.
//! 3. Otherwise skip the line and record a diagnostic on the transcript.
//!
//! Parsing is total: no input line can fail the whole parse, and the record
//! count never exceeds the input line count.
//!
//! # Example
//!
//! ```
//! use chatlens::{Dialect, TranscriptParser};
//!
//! let parser = TranscriptParser::new(Dialect::TwelveHour);
//! let transcript = parser.parse_str("01/01/23, 10:30 am - Alice: Hello there");
//!
//! assert_eq!(transcript.len(), 1);
//! assert_eq!(transcript.records()[0].author, "Alice");
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::dialect::Dialect;
use crate::error::Result;
use crate::record::Record;
use crate::transcript::{SkipReason, SkippedLine, Transcript};

/// Parser for WhatsApp TXT transcripts.
///
/// Construct with the [`Dialect`] matching the export's clock format, then
/// call [`parse_str`](Self::parse_str) (or [`parse`](Self::parse) for a
/// file). The dialect is dispatched once at parse entry; the grammar regex
/// is compiled once per call, not per line.
#[derive(Debug, Clone, Copy)]
pub struct TranscriptParser {
    dialect: Dialect,
}

impl TranscriptParser {
    /// Creates a parser for the given dialect.
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Returns the dialect this parser applies.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`](crate::error::ChatlensError::Io) if the
    /// file cannot be read. Line-level problems never error; see
    /// [`parse_str`](Self::parse_str).
    pub fn parse(&self, path: &Path) -> Result<Transcript> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str(&content))
    }

    /// Parses transcript content from a string.
    ///
    /// Total over any input: malformed lines are skipped with a diagnostic
    /// (see [`Transcript::skipped`]) and a `tracing` warning, never an error.
    pub fn parse_str(&self, content: &str) -> Transcript {
        let grammar = Regex::new(self.dialect.pattern()).expect("dialect patterns are valid");
        let format = self.dialect.timestamp_format();

        let mut records: Vec<Record> = Vec::new();
        let mut skipped: Vec<SkippedLine> = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let line_number = idx + 1;

            if let Some(caps) = grammar.captures(line) {
                let stamp = &caps[1];
                let author = &caps[2];
                let message = &caps[3];

                let mut record = Record::new(author, message);
                match NaiveDateTime::parse_from_str(stamp, format) {
                    Ok(ts) => record = record.with_timestamp(ts),
                    Err(err) => {
                        tracing::warn!(
                            line_number,
                            stamp,
                            %err,
                            "invalid timestamp, keeping record without calendar fields"
                        );
                    }
                }
                records.push(record);
            } else if let Some((_, remainder)) = line.split_once(" - ") {
                records.push(Record::notification(remainder));
            } else {
                let reason = if line.trim().is_empty() {
                    SkipReason::EmptyLine
                } else {
                    SkipReason::NoSeparator
                };
                tracing::warn!(line_number, content = line, %reason, "skipping line");
                skipped.push(SkippedLine {
                    line_number,
                    content: line.to_string(),
                    reason,
                });
            }
        }

        Transcript::new(records, skipped)
    }
}

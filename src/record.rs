//! Structured transcript records and derived calendar fields.
//!
//! This module provides [`Record`], the normalized representation of one
//! transcript line, and [`Calendar`], the calendar/time fields derived from a
//! record's timestamp at parse time.
//!
//! # Overview
//!
//! A record consists of:
//! - **Required**: `author` and `message`
//! - **Optional**: `timestamp` and the [`Calendar`] derived from it
//!
//! System/meta lines (joins, leaves, subject changes) that lack the usual
//! `author: message` shape carry the sentinel author [`GROUP_NOTIFICATION`].
//!
//! # Examples
//!
//! ```
//! use chatlens::Record;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 30, 0)
//!     .unwrap();
//! let record = Record::new("Alice", "Hello there").with_timestamp(ts);
//!
//! let calendar = record.calendar.as_ref().unwrap();
//! assert_eq!(calendar.hour, 10);
//! assert_eq!(calendar.hour_bucket, "10-11");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Sentinel author for system/meta lines (joins, leaves, subject changes)
/// that have no conventional `author: message` shape.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Literal marker WhatsApp substitutes for attachments in "without media"
/// exports.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// One structured chat line: author, message, and an optional timestamp with
/// its derived calendar fields.
///
/// Records are produced by [`TranscriptParser`](crate::parser::TranscriptParser)
/// and never mutated afterwards. A record whose timestamp failed to parse is
/// kept with `timestamp` and `calendar` both `None`; timeline operations skip
/// such records instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Author name, or [`GROUP_NOTIFICATION`] for system lines.
    pub author: String,

    /// Text after the `author: ` separator, or the whole remainder for
    /// notification lines.
    pub message: String,

    /// When the line was written. `None` for notification lines and for
    /// timestamps that failed to parse as a valid calendar date.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,

    /// Calendar fields derived from `timestamp` at parse time.
    /// `None` exactly when `timestamp` is `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub calendar: Option<Calendar>,
}

impl Record {
    /// Creates a record with no timestamp.
    pub fn new(author: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            message: message.into(),
            timestamp: None,
            calendar: None,
        }
    }

    /// Creates a [`GROUP_NOTIFICATION`] record for a system line.
    pub fn notification(message: impl Into<String>) -> Self {
        Self::new(GROUP_NOTIFICATION, message)
    }

    /// Builder method attaching a timestamp and the calendar derived from it.
    #[must_use]
    pub fn with_timestamp(mut self, ts: NaiveDateTime) -> Self {
        self.calendar = Some(Calendar::from_timestamp(ts));
        self.timestamp = Some(ts);
        self
    }

    /// Returns `true` if this record is a system/meta line.
    pub fn is_notification(&self) -> bool {
        self.author == GROUP_NOTIFICATION
    }

    /// Returns `true` if this record is a media-omission placeholder.
    pub fn is_media(&self) -> bool {
        self.message == MEDIA_OMITTED
    }
}

/// Calendar/time fields derived once from a record's timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    /// Four-digit year.
    pub year: i32,

    /// Full English month name, e.g. `"January"`.
    pub month_name: String,

    /// Month number, 1-12. Grouping key alongside `year`; using the name
    /// alone would misorder same-named months across years.
    pub month_number: u32,

    /// Date with the time-of-day stripped.
    pub date: NaiveDate,

    /// Day of month, 1-31.
    pub day_of_month: u32,

    /// Full English weekday name, e.g. `"Sunday"`.
    pub day_name: String,

    /// Hour of day, 0-23.
    pub hour: u32,

    /// Minute of hour, 0-59.
    pub minute: u32,

    /// One-hour time-of-day label, see [`hour_bucket`].
    pub hour_bucket: String,
}

impl Calendar {
    /// Derives all calendar fields from a timestamp.
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        Self {
            year: ts.year(),
            month_name: ts.format("%B").to_string(),
            month_number: ts.month(),
            date: ts.date(),
            day_of_month: ts.day(),
            day_name: ts.format("%A").to_string(),
            hour: ts.hour(),
            minute: ts.minute(),
            hour_bucket: hour_bucket(ts.hour()),
        }
    }
}

/// Returns the one-hour time-of-day label used for heatmap aggregation.
///
/// Interior hours are labelled `"<h>-<h+1>"` (`"9-10"`, `"10-11"`). The
/// wraparound labels are `"23-00"` and `"00-1"`. Their asymmetric zero
/// padding is kept verbatim for compatibility with existing consumers; do
/// not normalize without a product decision.
pub fn hour_bucket(hour: u32) -> String {
    match hour {
        23 => "23-00".to_string(),
        0 => "00-1".to_string(),
        h => format!("{}-{}", h, h + 1),
    }
}

//! Timestamp grammar dialects for transcript parsing.
//!
//! WhatsApp exports a transcript in either a 12-hour or a 24-hour clock
//! depending on device settings. The [`Dialect`] is selected once per parse
//! and applied uniformly; a single transcript cannot mix dialects.
//!
//! # Example
//!
//! ```
//! use chatlens::Dialect;
//! use std::str::FromStr;
//!
//! let dialect = Dialect::from_str("12-hour").unwrap();
//! assert_eq!(dialect, Dialect::TwelveHour);
//! ```

use serde::{Deserialize, Serialize};

/// The timestamp grammar variant governing how transcript lines are matched
/// and parsed.
///
/// Each dialect pairs a line-matching regex ([`pattern`](Dialect::pattern))
/// with a chrono format string ([`timestamp_format`](Dialect::timestamp_format)).
/// The parser compiles the pattern once at parse entry and applies it to
/// every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Dialect {
    /// `DD/MM/YY, H:MM am/pm` timestamps, e.g. `01/01/23, 10:30 am`.
    #[serde(rename = "12-hour", alias = "12")]
    TwelveHour,

    /// `DD/MM/YY, HH:MM` timestamps, e.g. `01/01/23, 22:30`.
    #[serde(rename = "24-hour", alias = "24")]
    TwentyFourHour,
}

impl Dialect {
    /// Returns the line-matching pattern for this dialect.
    ///
    /// Captures: 1 = timestamp text, 2 = author (any run without `:`),
    /// 3 = message (rest of line). Lines that fail this pattern fall to the
    /// notification branch of the parser.
    pub fn pattern(self) -> &'static str {
        match self {
            // 01/01/23, 10:30 am - Alice: Hello there
            Dialect::TwelveHour => r"^(\d{2}/\d{2}/\d{2}, \d{1,2}:\d{2}\s?[ap]m) - ([^:]+): (.+)",
            // 01/01/23, 22:30 - Alice: Hello there
            Dialect::TwentyFourHour => r"^(\d{2}/\d{2}/\d{2}, \d{2}:\d{2}) - ([^:]+): (.+)",
        }
    }

    /// Returns the chrono format string used to parse the captured
    /// timestamp text.
    pub fn timestamp_format(self) -> &'static str {
        match self {
            Dialect::TwelveHour => "%d/%m/%y, %I:%M %p",
            Dialect::TwentyFourHour => "%d/%m/%y, %H:%M",
        }
    }

    /// Returns all dialect names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["12-hour", "12", "24-hour", "24"]
    }

    /// Returns all available dialects.
    pub fn all() -> &'static [Dialect] {
        &[Dialect::TwelveHour, Dialect::TwentyFourHour]
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::TwelveHour => write!(f, "12-hour"),
            Dialect::TwentyFourHour => write!(f, "24-hour"),
        }
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "12-hour" | "12" => Ok(Dialect::TwelveHour),
            "24-hour" | "24" => Ok(Dialect::TwentyFourHour),
            _ => Err(format!(
                "Unknown dialect: '{}'. Expected one of: {}",
                s,
                Dialect::all_names().join(", ")
            )),
        }
    }
}

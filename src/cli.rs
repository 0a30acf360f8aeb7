//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`DialectArg`] - Dialect selection as a clap value enum
//!
//! [`DialectArg`] exists so the library's [`Dialect`] stays free of CLI
//! framework derives; convert with `From`:
//!
//! ```rust
//! use chatlens::Dialect;
//! use chatlens::cli::DialectArg;
//!
//! let dialect: Dialect = DialectArg::TwelveHour.into();
//! assert_eq!(dialect, Dialect::TwelveHour);
//! ```

use clap::{Parser, ValueEnum};

use crate::Dialect;

/// Analyze a WhatsApp chat export: activity, word and emoji frequency,
/// sentiment.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --dialect 12-hour
    chatlens chat.txt --user Alice
    chatlens chat.txt --json report.json
    chatlens chat.txt --stop-words custom_stop_words.txt --csv users.csv")]
pub struct Args {
    /// Path to the exported transcript
    pub input: String,

    /// Timestamp dialect of the export
    #[arg(short, long, value_enum, default_value = "24-hour")]
    pub dialect: DialectArg,

    /// Restrict analysis to one author ("Overall" for everyone)
    #[arg(short, long, default_value = "Overall", value_name = "NAME")]
    pub user: String,

    /// Stop-word list file (whitespace-delimited); built-in list if omitted
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<String>,

    /// Write the full report as JSON to this path
    #[arg(long, value_name = "FILE")]
    pub json: Option<String>,

    /// Write the busy-users table as CSV to this path
    #[arg(long, value_name = "FILE")]
    pub csv: Option<String>,

    /// How many of the top words/emoji to print
    #[arg(long, default_value_t = 10, value_name = "N")]
    pub top: usize,
}

/// Timestamp dialect options for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum DialectArg {
    /// DD/MM/YY, H:MM am/pm timestamps
    #[value(name = "12-hour", alias = "12")]
    TwelveHour,

    /// DD/MM/YY, HH:MM timestamps
    #[value(name = "24-hour", alias = "24")]
    TwentyFourHour,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::TwelveHour => Dialect::TwelveHour,
            DialectArg::TwentyFourHour => Dialect::TwentyFourHour,
        }
    }
}

impl std::fmt::Display for DialectArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Dialect::from(*self).fmt(f)
    }
}

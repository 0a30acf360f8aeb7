//! Stop-word list shared by the text-frequency operations.
//!
//! The list is loaded once (from a string, a file, or the built-in default)
//! and passed by reference into [`most_common_words`](crate::analytics::most_common_words)
//! and [`word_frequency_field`](crate::analytics::word_frequency_field) —
//! never re-read per call.
//!
//! # Example
//!
//! ```
//! use chatlens::StopWords;
//!
//! let stop_words = StopWords::from_text("the a an to hai kya");
//! assert!(stop_words.contains("the"));
//! assert!(!stop_words.contains("hello"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Default list shipped with the crate: common English plus Hinglish filler
/// words, the vocabulary the bundled CLI filters by.
const DEFAULT_LIST: &str = include_str!("../data/stop_words.txt");

/// An immutable set of words excluded from word-frequency results.
///
/// The source text is whitespace/newline-delimited; tokens are matched
/// exactly against lowercased message tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Builds the set from whitespace/newline-delimited text.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Reads and builds the set from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`](crate::error::ChatlensError::Io) if the
    /// file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// Returns the built-in default list.
    pub fn default_list() -> Self {
        Self::from_text(DEFAULT_LIST)
    }

    /// Returns an empty set (nothing is filtered).
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns `true` if `word` is in the set.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of distinct stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

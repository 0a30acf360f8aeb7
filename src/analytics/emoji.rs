//! Emoji frequency over the records in scope.

use unicode_segmentation::UnicodeSegmentation;

use super::{AuthorFilter, filtered, ranked_counts};
use crate::transcript::Transcript;

/// Counts every distinct emoji seen in scope, descending by count.
///
/// Messages are scanned grapheme-by-grapheme against the known emoji set,
/// so multi-codepoint emoji (skin tones, ZWJ sequences like 👨‍👩‍👧) count as
/// one. Ties keep their first-encounter order; the table covers every
/// distinct emoji, uncapped.
///
/// # Example
///
/// ```
/// use chatlens::analytics::{AuthorFilter, emoji_frequency};
/// use chatlens::{Record, Transcript};
///
/// let transcript = Transcript::new(vec![Record::new("Alice", "nice 😂😂🔥")], vec![]);
///
/// let emoji = emoji_frequency(&AuthorFilter::Overall, &transcript);
/// assert_eq!(emoji[0], ("😂".to_string(), 2));
/// assert_eq!(emoji[1], ("🔥".to_string(), 1));
/// ```
pub fn emoji_frequency(filter: &AuthorFilter, transcript: &Transcript) -> Vec<(String, usize)> {
    ranked_counts(
        filtered(filter, transcript)
            .flat_map(|r| r.message.graphemes(true))
            .filter(|g| emojis::get(g).is_some())
            .map(str::to_string),
    )
}

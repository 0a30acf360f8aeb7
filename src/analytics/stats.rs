//! Aggregate message/word/media/link counts.

use linkify::{LinkFinder, LinkKind};
use serde::{Deserialize, Serialize};

use super::{AuthorFilter, filtered};
use crate::transcript::Transcript;

/// Aggregate counts for one filter scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of records in scope (notifications included under `Overall`).
    pub messages: usize,
    /// Whitespace-delimited tokens summed across all messages in scope.
    pub words: usize,
    /// Exact matches of the media-omission marker.
    pub media: usize,
    /// URL-shaped substrings found across all messages in scope.
    pub links: usize,
}

/// Computes the aggregate counts for the records in scope.
///
/// Always returns zeroed stats for an empty scope; never fails.
///
/// # Example
///
/// ```
/// use chatlens::analytics::{AuthorFilter, fetch_stats};
/// use chatlens::{Record, Transcript};
///
/// let transcript = Transcript::new(
///     vec![Record::new("Alice", "see https://example.com for more")],
///     vec![],
/// );
///
/// let stats = fetch_stats(&AuthorFilter::Overall, &transcript);
/// assert_eq!(stats.messages, 1);
/// assert_eq!(stats.words, 4);
/// assert_eq!(stats.links, 1);
/// ```
pub fn fetch_stats(filter: &AuthorFilter, transcript: &Transcript) -> Stats {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);

    let mut stats = Stats::default();
    for record in filtered(filter, transcript) {
        stats.messages += 1;
        stats.words += record.message.split_whitespace().count();
        if record.is_media() {
            stats.media += 1;
        }
        stats.links += finder.links(&record.message).count();
    }
    stats
}

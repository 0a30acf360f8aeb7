//! Word-frequency operations: word-cloud input and top-word table.
//!
//! Both operations share the same row and token rules: notification rows and
//! media-omission rows are excluded, tokens are lowercased, and tokens found
//! in the caller's [`StopWords`] are dropped.

use super::{AuthorFilter, filtered, ranked_counts};
use crate::stopwords::StopWords;
use crate::transcript::Transcript;

/// Maximum number of entries [`most_common_words`] returns.
pub const MOST_COMMON_LIMIT: usize = 20;

/// Lowercased, stop-word-filtered tokens from the records in scope.
fn tokens<'a>(
    filter: &'a AuthorFilter,
    transcript: &'a Transcript,
    stop_words: &'a StopWords,
) -> impl Iterator<Item = String> + 'a {
    filtered(filter, transcript)
        .filter(|r| !r.is_notification() && !r.is_media())
        .flat_map(move |r| {
            r.message
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(move |word| !stop_words.contains(word))
}

/// Builds the bag-of-words blob an external word-cloud renderer consumes.
///
/// All kept tokens, joined with single spaces, in transcript order.
///
/// # Example
///
/// ```
/// use chatlens::analytics::{AuthorFilter, word_frequency_field};
/// use chatlens::{Record, StopWords, Transcript};
///
/// let transcript = Transcript::new(vec![Record::new("Alice", "The Lake THE lake")], vec![]);
/// let stop_words = StopWords::from_text("the");
///
/// let field = word_frequency_field(&AuthorFilter::Overall, &transcript, &stop_words);
/// assert_eq!(field, "lake lake");
/// ```
pub fn word_frequency_field(
    filter: &AuthorFilter,
    transcript: &Transcript,
    stop_words: &StopWords,
) -> String {
    tokens(filter, transcript, stop_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns the top-20 `(word, count)` pairs, descending by count.
///
/// Ties keep their first-encounter order. Fewer than 20 distinct words
/// yields a shorter table; an empty scope yields an empty one.
pub fn most_common_words(
    filter: &AuthorFilter,
    transcript: &Transcript,
    stop_words: &StopWords,
) -> Vec<(String, usize)> {
    let mut ranked = ranked_counts(tokens(filter, transcript, stop_words));
    ranked.truncate(MOST_COMMON_LIMIT);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{MEDIA_OMITTED, Record};

    fn transcript() -> Transcript {
        Transcript::new(
            vec![
                Record::new("Alice", "coffee tomorrow? Coffee sounds great"),
                Record::new("Bob", "coffee it is"),
                Record::new("Alice", MEDIA_OMITTED),
                Record::notification("Alice added Bob"),
            ],
            vec![],
        )
    }

    #[test]
    fn test_most_common_words_counts_lowercased() {
        let words = most_common_words(
            &AuthorFilter::Overall,
            &transcript(),
            &StopWords::from_text("it is"),
        );

        assert_eq!(words[0], ("coffee".to_string(), 3));
        assert!(words.iter().all(|(w, _)| w == &w.to_lowercase()));
    }

    #[test]
    fn test_stop_words_removed() {
        let words = most_common_words(
            &AuthorFilter::Overall,
            &transcript(),
            &StopWords::from_text("it is"),
        );
        assert!(!words.iter().any(|(w, _)| w == "it" || w == "is"));
    }

    #[test]
    fn test_media_and_notification_rows_excluded() {
        let words = most_common_words(
            &AuthorFilter::Overall,
            &transcript(),
            &StopWords::none(),
        );
        assert!(!words.iter().any(|(w, _)| w == "<media" || w == "added"));
    }

    #[test]
    fn test_top_20_cap() {
        let records = (0..30)
            .map(|i| Record::new("Alice", format!("word{i}")))
            .collect();
        let transcript = Transcript::new(records, vec![]);

        let words = most_common_words(&AuthorFilter::Overall, &transcript, &StopWords::none());
        assert_eq!(words.len(), MOST_COMMON_LIMIT);
    }

    #[test]
    fn test_word_frequency_field_joins_with_single_spaces() {
        let field = word_frequency_field(
            &AuthorFilter::Overall,
            &transcript(),
            &StopWords::from_text("it is"),
        );

        assert_eq!(
            field,
            "coffee tomorrow? coffee sounds great coffee"
        );
    }

    #[test]
    fn test_author_scope() {
        let words = most_common_words(
            &AuthorFilter::author("Bob"),
            &transcript(),
            &StopWords::none(),
        );
        assert_eq!(
            words,
            vec![
                ("coffee".to_string(), 1),
                ("it".to_string(), 1),
                ("is".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_empty_scope() {
        let words = most_common_words(
            &AuthorFilter::author("Mallory"),
            &transcript(),
            &StopWords::none(),
        );
        assert!(words.is_empty());
        assert_eq!(
            word_frequency_field(
                &AuthorFilter::author("Mallory"),
                &transcript(),
                &StopWords::none()
            ),
            ""
        );
    }
}

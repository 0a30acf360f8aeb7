//! Active-user ranking and share-of-total percentages.

use serde::{Deserialize, Serialize};

use super::ranked_counts;
use crate::transcript::Transcript;

/// One author's share of the total message count, rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShare {
    /// Author name (may be the notification sentinel).
    pub author: String,
    /// Percentage of all records, in [0, 100].
    pub percentage: f64,
}

/// Ranks authors by message count over the whole transcript.
///
/// Returns the descending `(author, count)` ranking and the matching
/// percentage table. Only meaningful at `Overall` scope, so no filter is
/// taken. `group_notification` participates like any author; excluding it
/// is a presentation decision left to the caller. Ties keep their
/// first-encounter order; an empty transcript yields two empty tables.
///
/// # Example
///
/// ```
/// use chatlens::analytics::most_busy_users;
/// use chatlens::{Record, Transcript};
///
/// let transcript = Transcript::new(
///     vec![
///         Record::new("Alice", "one"),
///         Record::new("Alice", "two"),
///         Record::new("Bob", "three"),
///         Record::new("Alice", "four"),
///     ],
///     vec![],
/// );
///
/// let (ranking, shares) = most_busy_users(&transcript);
/// assert_eq!(ranking[0], ("Alice".to_string(), 3));
/// assert_eq!(shares[0].percentage, 75.0);
/// ```
pub fn most_busy_users(transcript: &Transcript) -> (Vec<(String, usize)>, Vec<UserShare>) {
    let ranking = ranked_counts(transcript.iter().map(|r| r.author.clone()));

    let total = transcript.len();
    let shares = ranking
        .iter()
        .map(|(author, count)| UserShare {
            author: author.clone(),
            percentage: if total == 0 {
                0.0
            } else {
                round2(*count as f64 / total as f64 * 100.0)
            },
        })
        .collect();

    (ranking, shares)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn test_ranking_descending() {
        let transcript = Transcript::new(
            vec![
                Record::new("Bob", "1"),
                Record::new("Alice", "2"),
                Record::new("Alice", "3"),
            ],
            vec![],
        );

        let (ranking, _) = most_busy_users(&transcript);
        assert_eq!(
            ranking,
            vec![("Alice".to_string(), 2), ("Bob".to_string(), 1)]
        );
    }

    #[test]
    fn test_notification_rows_participate() {
        let transcript = Transcript::new(
            vec![
                Record::notification("Alice added Bob"),
                Record::notification("Bob left"),
                Record::new("Alice", "hi"),
            ],
            vec![],
        );

        let (ranking, _) = most_busy_users(&transcript);
        assert_eq!(ranking[0].0, "group_notification");
        assert_eq!(ranking[0].1, 2);
    }

    #[test]
    fn test_percentages_sum_to_about_100() {
        let transcript = Transcript::new(
            vec![
                Record::new("A", "1"),
                Record::new("B", "2"),
                Record::new("C", "3"),
            ],
            vec![],
        );

        let (_, shares) = most_busy_users(&transcript);
        let sum: f64 = shares.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 0.05, "sum was {sum}");
    }

    #[test]
    fn test_percentage_rounded_to_two_decimals() {
        // 1/3 of 100 rounds to 33.33
        let transcript = Transcript::new(
            vec![
                Record::new("A", "1"),
                Record::new("B", "2"),
                Record::new("B", "3"),
            ],
            vec![],
        );

        let (_, shares) = most_busy_users(&transcript);
        let a = shares.iter().find(|s| s.author == "A").unwrap();
        assert_eq!(a.percentage, 33.33);
    }

    #[test]
    fn test_empty_transcript_no_division() {
        let (ranking, shares) = most_busy_users(&Transcript::default());
        assert!(ranking.is_empty());
        assert!(shares.is_empty());
    }

    #[test]
    fn test_tie_keeps_first_encounter_order() {
        let transcript = Transcript::new(
            vec![Record::new("Zoe", "1"), Record::new("Amy", "2")],
            vec![],
        );

        let (ranking, _) = most_busy_users(&transcript);
        assert_eq!(ranking[0].0, "Zoe");
        assert_eq!(ranking[1].0, "Amy");
    }
}

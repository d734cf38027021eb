//! Frequency-weighted ranking of the completions of one query prefix.

use prefix_rank_core::Trie;
use std::fmt;

/// Maximum number of ranked completions reported per query.
pub const MAX_RESULTS: usize = 5;

/// A candidate completion of one query prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryMatch {
    /// The full completed word, prefix included.
    pub word: String,
    /// Its occurrence count in the corpus.
    pub frequency: u32,
    /// The share of `frequency` in the total frequency of every candidate
    /// considered for the query. A relative-rank score, not a calibrated
    /// statistical probability.
    pub probability: f32,
}

impl fmt::Display for QueryMatch {
    /// `<word>,<probability>` with the probability rendered as the
    /// shortest decimal that round-trips, e.g. `1.0`, `0.5`, `0.33333334`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{:?}", self.word, self.probability)
    }
}

/// Rank every completion of `prefix` by descending probability and return
/// the top [MAX_RESULTS] of them.
///
/// The candidates are the prefix itself when it is a complete word, plus
/// every word of the sub-trie rooted at the prefix. Probabilities are
/// relative to the summed frequency of all candidates, so they sum to 1
/// before truncation. Candidates of equal probability are ordered
/// lexicographically to keep the result deterministic.
pub fn rank_prefix(trie: &Trie, prefix: &str) -> Vec<QueryMatch> {
    let mut total: u32 = 0;
    let mut candidates = Vec::new();

    // The exact-prefix word competes with the subtree completions
    let exact = trie.frequency_of(prefix);
    if exact > 0 {
        candidates.push((prefix.to_string(), exact));
        total += exact;
    }

    if let Some(sub_trie) = trie.sub_trie(prefix) {
        for suffix in sub_trie.words() {
            // Resolved from the view, the prefix path is not walked again
            let frequency = sub_trie.frequency_of(&suffix);
            total += frequency;

            let mut word = String::with_capacity(prefix.len() + suffix.len());
            word.push_str(prefix);
            word.push_str(&suffix);
            candidates.push((word, frequency));
        }
    }

    // No candidate carries any weight, nothing to rank or divide by
    if total == 0 {
        return Vec::new();
    }

    let mut matches: Vec<QueryMatch> = candidates
        .into_iter()
        .map(|(word, frequency)| QueryMatch {
            word,
            frequency,
            probability: frequency as f32 / total as f32,
        })
        .collect();

    // Every probability shares the same divisor, so comparing the integer
    // frequencies gives the descending-probability order without touching
    // floats. Ties break on the word text, ascending.
    matches.sort_unstable_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.word.cmp(&b.word))
    });
    matches.truncate(MAX_RESULTS);

    matches
}

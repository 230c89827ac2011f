//! Rhyme queries against a [`RhymeIndex`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::index::RhymeIndex;
use crate::score::score;
use crate::segment::{RhymeKey, rhyme_ending};

/// A vocabulary word with its rhyme score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoredCandidate {
    /// The rhyming word.
    pub word: String,
    /// Similarity to the query word in `[0, 1]`, two decimals.
    pub score: f64,
}

/// Ranked query results, serialized as `{"scoreboard": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Scoreboard {
    /// Candidates, best first.
    pub scoreboard: Vec<ScoredCandidate>,
}

impl From<Vec<ScoredCandidate>> for Scoreboard {
    fn from(scoreboard: Vec<ScoredCandidate>) -> Self {
        Self { scoreboard }
    }
}

/// Find words rhyming with `word` that have `syllables` syllables.
///
/// `syllables` selects the bucket and need not be the word's own count; the
/// score still penalizes the difference from the word's own count. The word
/// itself (and any duplicate of it) is excluded. Results are ordered by
/// score, highest first, then by word.
#[tracing::instrument(skip(index), fields(candidates = tracing::field::Empty))]
pub fn find_rhymes(index: &RhymeIndex, word: &str, syllables: usize) -> Vec<ScoredCandidate> {
    let key = RhymeKey::new(syllables, rhyme_ending(word));
    let bucket = index.lookup(&key);
    tracing::Span::current().record("candidates", bucket.len());

    let mut results: Vec<ScoredCandidate> = bucket
        .iter()
        .filter(|candidate| candidate.as_str() != word)
        .map(|candidate| ScoredCandidate {
            score: score(word, candidate),
            word: candidate.clone(),
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
    tracing::debug!(%key, results = results.len(), "rhyme query answered");
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(results: &[ScoredCandidate]) -> Vec<&str> {
        results.iter().map(|r| r.word.as_str()).collect()
    }

    #[test]
    fn finds_exact_rhymes_only() {
        let index = RhymeIndex::build(["kot", "bot", "nauka"]);
        let results = find_rhymes(&index, "kot", 1);
        assert_eq!(
            results,
            [ScoredCandidate {
                word: "bot".to_string(),
                score: 1.0,
            }]
        );
    }

    #[test]
    fn excludes_query_word_and_its_duplicates() {
        let index = RhymeIndex::build(["kot", "bot", "kot", "płot", "kot"]);
        let results = find_rhymes(&index, "kot", 1);
        assert_eq!(words(&results), ["bot", "płot"]);
    }

    #[test]
    fn sorts_by_score_then_word() {
        let index = RhymeIndex::build(["noga", "moda", "koda", "ruda", "woda", "broda"]);
        let results = find_rhymes(&index, "woda", 2);
        assert_eq!(words(&results), ["broda", "koda", "moda", "ruda", "noga"]);
        for pair in results.windows(2) {
            let ordered = pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].word <= pair[1].word);
            assert!(ordered, "{pair:?} out of order");
        }
    }

    #[test]
    fn caller_picks_syllable_count() {
        let index = RhymeIndex::build(["bot", "łokot", "samolot"]);

        let two = find_rhymes(&index, "kot", 2);
        assert_eq!(words(&two), ["łokot"]);
        assert_eq!(two[0].score, 0.95);

        let three = find_rhymes(&index, "kot", 3);
        assert_eq!(words(&three), ["samolot"]);
        assert_eq!(three[0].score, 0.9);
    }

    #[test]
    fn missing_bucket_is_empty() {
        let index = RhymeIndex::build(["kot", "bot"]);
        assert!(find_rhymes(&index, "dom", 1).is_empty());
        assert!(find_rhymes(&index, "kot", 4).is_empty());
    }

    #[test]
    fn empty_word_matches_degenerate_bucket() {
        let index = RhymeIndex::build(["brr", "kot"]);
        let results = find_rhymes(&index, "", 0);
        assert_eq!(words(&results), ["brr"]);
    }

    #[test]
    fn scoreboard_serializes_like_endpoint() {
        let board = Scoreboard::from(vec![ScoredCandidate {
            word: "bot".to_string(),
            score: 1.0,
        }]);
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["scoreboard"][0]["word"], "bot");
        assert_eq!(json["scoreboard"][0]["score"], 1.0);
    }
}

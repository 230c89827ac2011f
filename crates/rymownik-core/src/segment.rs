//! Word segmentation into vowel and consonant runs.
//!
//! A word splits uniquely into alternating maximal runs of vowel letters and
//! of non-vowel letters. Everything rhyme-related is derived from those runs:
//!
//! - the syllable count (vowel letters, corrected for glides and diphthongs),
//! - the rhyme ending (last vowel nucleus plus the devoiced final cluster),
//! - the rhyme beginning (the stem in front of the last vowel nucleus).
//!
//! The functions here are total: an empty word, or one with no vowels, has
//! zero syllables and an empty ending and beginning.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::letters::{devoice_final_cluster, is_vowel};

/// Whether a run is made of vowel or non-vowel letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// Only vowel letters.
    Vowel,
    /// Only non-vowel letters.
    Consonant,
}

/// A maximal run of letters of one [`RunKind`].
///
/// `start` and `end` are byte offsets, so `&word[run.start..run.end]` is the
/// same slice as `run.text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    /// The letters of the run.
    pub text: &'a str,
    /// Byte offset of the first letter.
    pub start: usize,
    /// Byte offset just past the last letter.
    pub end: usize,
    /// Vowel or consonant run.
    pub kind: RunKind,
}

impl Run<'_> {
    /// Vowel run starting with `i` plus another vowel, where the `i` only
    /// marks softening (`nie`, `kiosk`, `pióro`).
    fn opens_with_glide(&self) -> bool {
        let mut letters = self.text.chars();
        letters.next() == Some('i') && letters.next().is_some_and(is_vowel)
    }

    /// Vowel run starting with one of the diphthongs `au` or `eu`.
    fn opens_with_diphthong(&self) -> bool {
        self.text.starts_with("au") || self.text.starts_with("eu")
    }

    /// Byte length of the rhyming nucleus at the end of a vowel run: the
    /// last two letters after a glide, otherwise the last letter.
    fn nucleus_len(&self) -> usize {
        let take = if self.opens_with_glide() { 2 } else { 1 };
        self.text
            .chars()
            .rev()
            .take(take)
            .map(char::len_utf8)
            .sum()
    }

    /// The rhyming nucleus at the end of a vowel run.
    fn nucleus(&self) -> &str {
        &self.text[self.text.len() - self.nucleus_len()..]
    }
}

/// Iterator over the alternating runs of a word. See [`runs`].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    word: &'a str,
    pos: usize,
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.word[self.pos..];
        let first = rest.chars().next()?;
        let vowel = is_vowel(first);
        let len = rest
            .char_indices()
            .find(|&(_, c)| is_vowel(c) != vowel)
            .map_or(rest.len(), |(i, _)| i);

        let start = self.pos;
        self.pos += len;
        Some(Run {
            text: &rest[..len],
            start,
            end: self.pos,
            kind: if vowel {
                RunKind::Vowel
            } else {
                RunKind::Consonant
            },
        })
    }
}

/// Split a word into its alternating vowel and consonant runs, left to right.
pub const fn runs(word: &str) -> Runs<'_> {
    Runs { word, pos: 0 }
}

/// All maximal vowel runs of `word`, left to right.
pub fn vowel_runs(word: &str) -> Vec<Run<'_>> {
    runs(word).filter(|r| r.kind == RunKind::Vowel).collect()
}

/// All maximal consonant runs of `word`, left to right.
pub fn consonant_runs(word: &str) -> Vec<Run<'_>> {
    runs(word)
        .filter(|r| r.kind == RunKind::Consonant)
        .collect()
}

fn last_vowel_run(word: &str) -> Option<Run<'_>> {
    runs(word).filter(|r| r.kind == RunKind::Vowel).last()
}

/// Count syllables as vowel letters, minus one for each run that opens with
/// a glide `i` or with the diphthong `au`/`eu`.
pub fn syllable_count(word: &str) -> usize {
    runs(word)
        .filter(|r| r.kind == RunKind::Vowel)
        .map(|run| {
            let letters = run.text.chars().count();
            let merged =
                usize::from(run.opens_with_glide()) + usize::from(run.opens_with_diphthong());
            letters - merged
        })
        .sum()
}

/// Map a final consonant cluster to its word-final pronunciation.
fn final_cluster(word: &str) -> &str {
    runs(word)
        .filter(|r| r.kind == RunKind::Consonant)
        .last()
        .map_or("", |run| devoice_final_cluster(run.text))
}

/// The exact-rhyme ending of a word: the last vowel nucleus, followed by the
/// devoiced final consonant cluster when the word ends in a consonant.
///
/// `ó` is read as `u` for the nucleus (`róg` and `Bug` rhyme on `uk`).
pub fn rhyme_ending(word: &str) -> String {
    let spoken = word.replace('ó', "u");
    let Some(last) = last_vowel_run(&spoken) else {
        return String::new();
    };

    let mut ending = last.nucleus().to_string();
    if !word.chars().next_back().is_some_and(is_vowel) {
        ending.push_str(final_cluster(word));
    }
    ending
}

/// The stem in front of the last vowel nucleus.
///
/// Unlike [`rhyme_ending`], this works on the word as written.
pub fn word_beginning(word: &str) -> &str {
    last_vowel_run(word).map_or("", |last| &word[..last.end - last.nucleus_len()])
}

/// Identifies an exact-rhyme class: words with equal keys rhyme exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub struct RhymeKey {
    /// Number of syllables.
    pub syllables: usize,
    /// Rhyme ending, see [`rhyme_ending`].
    pub ending: String,
}

impl RhymeKey {
    /// Create a key from its parts.
    pub fn new(syllables: usize, ending: impl Into<String>) -> Self {
        Self {
            syllables,
            ending: ending.into(),
        }
    }
}

impl fmt::Display for RhymeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.syllables, self.ending)
    }
}

/// The rhyme key of `word`: its own syllable count and rhyme ending.
pub fn rhyme_key(word: &str) -> RhymeKey {
    RhymeKey::new(syllable_count(word), rhyme_ending(word))
}

/// Segmentation diagnostics for a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordAnalysis {
    /// The analyzed word, as given.
    pub word: String,
    /// See [`syllable_count`].
    pub syllables: usize,
    /// See [`rhyme_ending`].
    pub ending: String,
    /// See [`word_beginning`].
    pub beginning: String,
    /// Index bucket key in `<syllables>_<ending>` form.
    pub key: String,
}

/// Run every segmentation step on `word`.
pub fn analyze_word(word: &str) -> WordAnalysis {
    let key = rhyme_key(word);
    WordAnalysis {
        word: word.to_string(),
        syllables: key.syllables,
        beginning: word_beginning(word).to_string(),
        key: key.to_string(),
        ending: key.ending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(runs: &[Run<'a>]) -> Vec<&'a str> {
        runs.iter().map(|r| r.text).collect()
    }

    #[test]
    fn runs_alternate_and_cover_word() {
        let word = "chrząszcz";
        let all: Vec<_> = runs(word).collect();
        assert_eq!(texts(&all), ["chrz", "ą", "szcz"]);
        assert_eq!(all[1].kind, RunKind::Vowel);
        assert_eq!(all.last().map(|r| r.end), Some(word.len()));
        for run in &all {
            assert_eq!(&word[run.start..run.end], run.text);
        }
    }

    #[test]
    fn vowel_and_consonant_runs() {
        assert_eq!(texts(&vowel_runs("nauka")), ["au", "a"]);
        assert_eq!(texts(&consonant_runs("nauka")), ["n", "k"]);
        assert!(vowel_runs("brr").is_empty());
        assert!(runs("").next().is_none());
    }

    #[test]
    fn syllables_plain() {
        assert_eq!(syllable_count("kot"), 1);
        assert_eq!(syllable_count("woda"), 2);
        assert_eq!(syllable_count("samochód"), 3);
    }

    #[test]
    fn syllables_diphthong() {
        assert_eq!(syllable_count("nauka"), 2);
        assert_eq!(syllable_count("europa"), 3);
        assert_eq!(syllable_count("auto"), 2);
    }

    #[test]
    fn syllables_glide() {
        assert_eq!(syllable_count("nie"), 1);
        assert_eq!(syllable_count("kiosk"), 1);
        assert_eq!(syllable_count("ziemia"), 2);
        assert_eq!(syllable_count("pióro"), 2);
    }

    #[test]
    fn syllables_without_vowels() {
        assert_eq!(syllable_count(""), 0);
        assert_eq!(syllable_count("brr"), 0);
    }

    #[test]
    fn ending_open_syllable() {
        assert_eq!(rhyme_ending("woda"), "a");
        assert_eq!(rhyme_ending("ziemia"), "ia");
        assert_eq!(rhyme_ending("nie"), "ie");
    }

    #[test]
    fn ending_closed_syllable() {
        assert_eq!(rhyme_ending("kot"), "ot");
        assert_eq!(rhyme_ending("chrząszcz"), "ąszcz");
        assert_eq!(rhyme_ending("kiosk"), "iosk");
    }

    #[test]
    fn ending_devoices_final_cluster() {
        assert_eq!(rhyme_ending("róg"), "uk");
        assert_eq!(rhyme_ending("bez"), "es");
        assert_eq!(rhyme_ending("lew"), "ef");
        assert_eq!(rhyme_ending("morze"), "e");
        assert_eq!(rhyme_ending("talerz"), "esz");
        assert_eq!(rhyme_ending("brydż"), "ycz");
        assert_eq!(rhyme_ending("dach"), "ah");
    }

    #[test]
    fn ending_reads_o_acute_as_u() {
        assert_eq!(rhyme_ending("samochód"), "ut");
        assert_eq!(rhyme_ending("Bug"), rhyme_ending("róg"));
    }

    #[test]
    fn ending_without_vowels() {
        assert_eq!(rhyme_ending(""), "");
        assert_eq!(rhyme_ending("brr"), "");
    }

    #[test]
    fn beginning_strips_last_nucleus() {
        assert_eq!(word_beginning("kot"), "k");
        assert_eq!(word_beginning("woda"), "wod");
        assert_eq!(word_beginning("ziemia"), "ziem");
        assert_eq!(word_beginning("nauka"), "nauk");
        assert_eq!(word_beginning("samochód"), "samoch");
    }

    #[test]
    fn beginning_keeps_leading_vowels_of_long_run() {
        // Last run "eu" has no glide, so only its last letter is cut.
        assert_eq!(word_beginning("museum"), "muse");
    }

    #[test]
    fn beginning_without_vowels() {
        assert_eq!(word_beginning(""), "");
        assert_eq!(word_beginning("brr"), "");
    }

    #[test]
    fn rhyme_key_is_deterministic() {
        assert_eq!(rhyme_key("kot"), RhymeKey::new(1, "ot"));
        assert_eq!(rhyme_key("nauka"), rhyme_key("nauka"));
        assert_eq!(rhyme_key(""), RhymeKey::new(0, ""));
    }

    #[test]
    fn rhyme_key_display() {
        assert_eq!(RhymeKey::new(2, "uk").to_string(), "2_uk");
    }

    #[test]
    fn analyze_word_bundles_parts() {
        let analysis = analyze_word("samochód");
        assert_eq!(analysis.syllables, 3);
        assert_eq!(analysis.ending, "ut");
        assert_eq!(analysis.beginning, "samoch");
        assert_eq!(analysis.key, "3_ut");
    }
}

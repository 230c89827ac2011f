//! Graded similarity between two words that rhyme exactly.
//!
//! Exact rhymes share a rhyme ending. The score grades them further:
//!
//! 1. A one-syllable query word scores `1.0` against every exact rhyme.
//! 2. Otherwise the base is `0.4` for open rhymes (ending in a vowel) and
//!    `0.7` for rhymes closed by a consonant.
//! 3. Letters shared by the two stems, counted backwards from the rhyme,
//!    close the gap to `1.0` in proportion to the query stem's length from
//!    its first vowel.
//! 4. Each syllable of difference between the two words costs 5%.
//!
//! The score is asymmetric: the query word decides both the one-syllable
//! shortcut and the stem length the shared letters are measured against.

use crate::letters::is_vowel;
use crate::segment::{rhyme_ending, syllable_count, word_beginning};

/// Base score for an exact rhyme ending in a vowel.
pub const OPEN_RHYME_BASE: f64 = 0.4;

/// Base score for an exact rhyme ending in a consonant.
pub const CLOSED_RHYME_BASE: f64 = 0.7;

/// Fraction of the score lost per syllable of difference.
pub const SYLLABLE_PENALTY: f64 = 0.05;

/// Spelling variants that sound alike, applied in order before stems are
/// compared.
const SPELLING_VARIANTS: &[(&str, &str)] = &[("ó", "u"), ("ch", "h"), ("au", "ał"), ("eu", "eł")];

/// Canonicalize a stem so spelling variants compare equal (`góra`/`gura`,
/// `chata`/`hata`). The diphthongs `au`/`eu` become `ał`/`eł`.
pub fn normalize_beginning(beginning: &str) -> String {
    SPELLING_VARIANTS
        .iter()
        .fold(beginning.to_string(), |stem, (from, to)| stem.replace(from, to))
}

/// Round to two decimals, ties to even, on the exact value of `value`.
///
/// `value * 100.0` may itself round; the fused multiply-add recovers the
/// exact remainder so near-ties resolve the same way decimal rounding would.
pub fn round_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    let error = value.mul_add(100.0, -scaled);
    let floor = scaled.floor();
    let rounded = if scaled - floor != 0.5 {
        scaled.round()
    } else if error > 0.0 {
        floor + 1.0
    } else if error < 0.0 || floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    };
    rounded / 100.0
}

/// Letters the candidate stem shares with the query stem, and the query stem
/// length they are measured against.
///
/// The query stem is measured from its first vowel to its end, and shared
/// letters are counted backwards from the rhyme until the first mismatch.
/// Returns `None` when the query stem has no vowel to measure from.
fn shared_stem(original: &str, candidate: &str) -> Option<(usize, usize)> {
    let original = normalize_beginning(original);
    let candidate = normalize_beginning(candidate);

    let letters: Vec<char> = original.chars().collect();
    let first_vowel = letters.iter().position(|&c| is_vowel(c))?;
    let max_letters = letters.len() - first_vowel;

    let same_letters = letters
        .iter()
        .rev()
        .zip(candidate.chars().rev())
        .take(max_letters)
        .take_while(|(a, b)| **a == *b)
        .count();

    Some((same_letters, max_letters))
}

/// Score how well `candidate` rhymes with `original`, in `[0, 1]` rounded
/// to two decimals.
///
/// Words with different rhyme endings score `0.0`. See the module docs for
/// the formula.
// Plain arithmetic keeps the rounding of every intermediate step stable.
#[allow(clippy::suboptimal_flops)]
pub fn score(original: &str, candidate: &str) -> f64 {
    let ending = rhyme_ending(original);
    if ending != rhyme_ending(candidate) {
        return 0.0;
    }

    let original_syllables = syllable_count(original);
    let candidate_syllables = syllable_count(candidate);

    let base = if original_syllables == 1 {
        1.0
    } else {
        let anchor = if ending.chars().next_back().is_some_and(is_vowel) {
            OPEN_RHYME_BASE
        } else {
            CLOSED_RHYME_BASE
        };
        match shared_stem(word_beginning(original), word_beginning(candidate)) {
            Some((same, max)) => anchor + (1.0 - anchor) * same as f64 / max as f64,
            None => anchor,
        }
    };

    let difference = original_syllables.abs_diff(candidate_syllables) as f64;
    let penalized = (base * (1.0 - SYLLABLE_PENALTY * difference)).max(0.0);
    round_to_hundredths(penalized)
}

//! Letter classes for Polish orthography.
//!
//! Rhyme analysis works on spelling, not on a phonetic transcription. Two
//! fixed tables drive it: the set of vowel letters, and the word-final
//! devoicing table that maps a written consonant cluster to the cluster it is
//! pronounced as at the end of a word (`róg` ends in /k/, `bez` in /s/).
//!
//! Any letter outside [`VOWELS`] counts as a consonant, including digits,
//! punctuation and letters from other alphabets.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Vowel letters: the Latin base vowels plus the Polish `ą`, `ę` and `ó`.
pub const VOWELS: [char; 9] = ['a', 'ą', 'e', 'ę', 'i', 'o', 'ó', 'u', 'y'];

/// Word-final consonant clusters and the cluster they are pronounced as.
///
/// Digraphs come first so the table reads the way it is matched: the whole
/// final cluster is looked up as one key, never letter by letter.
pub static FINAL_DEVOICING: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Digraphs and voiced fricatives
        ("ż", "sz"),
        ("rz", "sz"),
        ("dż", "cz"),
        ("dź", "ć"),
        ("dz", "c"),
        ("ch", "h"),
        // Single voiced obstruents
        ("b", "p"),
        ("g", "k"),
        ("w", "f"),
        ("d", "t"),
        ("z", "s"),
    ])
});

/// Returns `true` if `letter` is one of the [`VOWELS`].
pub const fn is_vowel(letter: char) -> bool {
    matches!(letter, 'a' | 'ą' | 'e' | 'ę' | 'i' | 'o' | 'ó' | 'u' | 'y')
}

/// Returns the word-final pronunciation of a consonant cluster.
///
/// The cluster must match a [`FINAL_DEVOICING`] key exactly. Clusters that
/// are not in the table, including longer clusters that merely end in a
/// voiced letter (`rd`, `zd`), come back unchanged.
pub fn devoice_final_cluster(cluster: &str) -> &str {
    FINAL_DEVOICING.get(cluster).copied().unwrap_or(cluster)
}

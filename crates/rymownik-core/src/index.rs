//! Exact-rhyme index over a vocabulary.
//!
//! Words are bucketed by [`RhymeKey`]. Buckets keep vocabulary order,
//! including duplicates. The index is built once and is read-only afterwards;
//! share it behind an `Arc` to serve concurrent queries.

use std::collections::HashMap;

use crate::segment::{RhymeKey, rhyme_key};

/// Vocabulary words grouped by rhyme key.
#[derive(Debug, Clone, Default)]
pub struct RhymeIndex {
    buckets: HashMap<RhymeKey, Vec<String>>,
    words: usize,
}

impl RhymeIndex {
    /// Build the index, appending each word to the bucket of its own
    /// rhyme key in vocabulary order.
    #[tracing::instrument(skip_all)]
    pub fn build<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buckets: HashMap<RhymeKey, Vec<String>> = HashMap::new();
        let mut words = 0;
        for word in vocabulary {
            let word = word.into();
            buckets.entry(rhyme_key(&word)).or_default().push(word);
            words += 1;
        }
        tracing::debug!(words, buckets = buckets.len(), "rhyme index built");
        Self { buckets, words }
    }

    /// Words filed under `key`, in vocabulary order. Empty if the key has
    /// no bucket.
    pub fn lookup(&self, key: &RhymeKey) -> &[String] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of indexed words, duplicates included.
    pub const fn len(&self) -> usize {
        self.words
    }

    /// Returns `true` if no words were indexed.
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of distinct rhyme keys.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

impl<S: Into<String>> FromIterator<S> for RhymeIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::build(iter)
    }
}

//! Word list loading.
//!
//! A vocabulary is one word per line, in a single file or spread over the
//! `*.txt` files of a directory. Lines are trimmed and blank lines skipped;
//! nothing else is normalized, so case and duplicates survive as written.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{VocabularyError, VocabularyResult};

/// Extension of word list files inside a vocabulary directory.
const WORD_LIST_EXTENSION: &str = "txt";

/// An ordered list of vocabulary words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Parse a word list, one word per line.
    pub fn parse(text: &str) -> Self {
        let mut vocabulary = Self::default();
        vocabulary.extend_from(text);
        vocabulary
    }

    /// Load a word list file, or every `*.txt` file directly inside a
    /// directory in file-name order.
    ///
    /// Each file is checked against `max_bytes` before it is read.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn from_path(path: &Utf8Path, max_bytes: Option<usize>) -> VocabularyResult<Self> {
        let metadata = std::fs::metadata(path).map_err(|source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let files = if metadata.is_dir() {
            word_list_files(path)?
        } else {
            vec![path.to_path_buf()]
        };

        let mut vocabulary = Self::default();
        for file in &files {
            let text = read_word_list(file, max_bytes)?;
            vocabulary.extend_from(&text);
        }

        if vocabulary.is_empty() {
            return Err(VocabularyError::Empty {
                path: path.to_path_buf(),
            });
        }

        tracing::info!(
            files = files.len(),
            words = vocabulary.len(),
            "vocabulary loaded"
        );
        Ok(vocabulary)
    }

    fn extend_from(&mut self, text: &str) {
        self.words.extend(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    /// The words, in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Consume the vocabulary, returning its words.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Number of words, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if there are no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The `*.txt` files directly inside `dir`, sorted by name.
fn word_list_files(dir: &Utf8Path) -> VocabularyResult<Vec<Utf8PathBuf>> {
    let io_error = |source| VocabularyError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in dir.read_dir_utf8().map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let path = entry.path();
        if path.extension() == Some(WORD_LIST_EXTENSION) && path.is_file() {
            files.push(path.to_path_buf());
        }
    }

    if files.is_empty() {
        return Err(VocabularyError::NoWordFiles {
            path: dir.to_path_buf(),
        });
    }
    files.sort();
    tracing::debug!(count = files.len(), "found word list files");
    Ok(files)
}

/// Read one word list after checking its size via metadata.
fn read_word_list(path: &Utf8Path, max_bytes: Option<usize>) -> VocabularyResult<String> {
    let io_error = |source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(limit) = max_bytes {
        let size = std::fs::metadata(path).map_err(io_error)?.len();
        if size > limit as u64 {
            return Err(VocabularyError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
    }

    std::fs::read_to_string(path).map_err(io_error)
}

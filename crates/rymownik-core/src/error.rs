//! Error types for rymownik-core.
//!
//! The rhyme engine itself is infallible; only configuration and vocabulary
//! loading touch the filesystem and can fail.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a vocabulary.
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// A vocabulary file or directory could not be read.
    #[error("failed to read {path}")]
    Io {
        /// The path that failed.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A vocabulary file exceeds the configured size limit.
    #[error("vocabulary file too large: {path} is {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// The oversized file.
        path: Utf8PathBuf,
        /// Its size in bytes.
        size: u64,
        /// The configured limit in bytes.
        limit: usize,
    },

    /// A vocabulary directory holds no `.txt` word lists.
    #[error("no .txt word lists in {path}")]
    NoWordFiles {
        /// The directory that was searched.
        path: Utf8PathBuf,
    },

    /// The vocabulary contains no words after trimming blank lines.
    #[error("vocabulary at {path} contains no words")]
    Empty {
        /// The file or directory that was loaded.
        path: Utf8PathBuf,
    },
}

/// Result type alias using [`VocabularyError`].
pub type VocabularyResult<T> = Result<T, VocabularyError>;

//! Core library for rymownik.
//!
//! Finds Polish words that rhyme with a given word and ranks them by
//! phonetic closeness. The analysis works on spelling alone: letter classes
//! and a handful of pronunciation rules, no phonetic transcription.
//!
//! # Modules
//!
//! - [`letters`] - Vowel set and word-final devoicing table
//! - [`segment`] - Vowel/consonant runs, syllables, rhyme ending and beginning
//! - [`index`] - Vocabulary bucketed by exact rhyme key
//! - [`score`] - Graded similarity between exact rhymes
//! - [`query`] - Ranked rhyme lookup
//! - [`vocabulary`] - Word list loading
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use rymownik_core::{RhymeIndex, find_rhymes};
//!
//! let index = RhymeIndex::build(["kot", "bot", "nauka"]);
//! let rhymes = find_rhymes(&index, "kot", 1);
//!
//! assert_eq!(rhymes.len(), 1);
//! assert_eq!(rhymes[0].word, "bot");
//! assert_eq!(rhymes[0].score, 1.0);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod index;
pub mod letters;
pub mod query;
pub mod score;
pub mod segment;
pub mod vocabulary;

pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult, VocabularyError, VocabularyResult};
pub use index::RhymeIndex;
pub use query::{Scoreboard, ScoredCandidate, find_rhymes};
pub use score::score;
pub use segment::{
    RhymeKey, WordAnalysis, analyze_word, rhyme_ending, rhyme_key, syllable_count, word_beginning,
};
pub use vocabulary::Vocabulary;

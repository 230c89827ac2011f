//! Command implementations.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use rymownik_core::{Config, RhymeIndex, Vocabulary};

pub mod analyze;
pub mod info;
pub mod rhymes;
#[cfg(feature = "mcp")]
pub mod serve;

/// Load the vocabulary at `path` and build its rhyme index.
///
/// Shared by every command that answers rhyme queries. Shows a spinner on
/// stderr while a large word list loads; it stays hidden when stderr is not
/// a terminal.
pub fn load_index(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<RhymeIndex> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .context("invalid progress template")?,
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("loading {path}"));

    let vocabulary = Vocabulary::from_path(path, max_bytes)
        .with_context(|| format!("failed to load vocabulary from {path}"))?;

    spinner.set_message(format!("indexing {} words", vocabulary.len()));
    let index = RhymeIndex::build(vocabulary.into_words());
    spinner.finish_and_clear();

    Ok(index)
}

/// Pick the vocabulary path: the `--dictionary` flag wins over the config,
/// and relative paths resolve against `cwd`.
pub fn resolve_dictionary(flag: Option<&Utf8Path>, config: &Config, cwd: &Utf8Path) -> Utf8PathBuf {
    match flag {
        Some(path) if path.is_relative() => cwd.join(path),
        Some(path) => path.to_path_buf(),
        None => config.dictionary_path(cwd),
    }
}

/// Reject words the engine cannot meaningfully query.
pub fn validate_word(word: &str) -> anyhow::Result<&str> {
    let word = word.trim();
    if word.is_empty() {
        anyhow::bail!("word must not be empty");
    }
    Ok(word)
}

//! Rhymes command implementation

use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout};
use tracing::{debug, instrument};

use rymownik_core::{Config, Scoreboard, ScoredCandidate, find_rhymes, syllable_count};

use super::{load_index, resolve_dictionary, validate_word};

/// Arguments for the `rhymes` subcommand.
#[derive(Args, Debug)]
pub struct RhymesArgs {
    /// Word to find rhymes for.
    pub word: String,

    /// Syllable count of the rhymes (defaults to the word's own).
    #[arg(short, long)]
    pub syllables: Option<usize>,

    /// Vocabulary file or directory of *.txt word lists.
    #[arg(short, long, value_name = "PATH")]
    pub dictionary: Option<Utf8PathBuf>,

    /// Show at most N rhymes.
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Hide rhymes scoring below this value (0-1).
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<f64>,
}

/// Find and print rhymes for a word.
#[instrument(name = "cmd_rhymes", skip_all, fields(word = %args.word))]
pub fn cmd_rhymes(
    args: RhymesArgs,
    global_json: bool,
    config: &Config,
    cwd: &Utf8Path,
) -> anyhow::Result<()> {
    debug!(word = %args.word, syllables = ?args.syllables, "executing rhymes command");

    let word = validate_word(&args.word)?;
    let syllables = args.syllables.unwrap_or_else(|| syllable_count(word));
    let dictionary = resolve_dictionary(args.dictionary.as_deref(), config, cwd);

    let index = load_index(&dictionary, config.input_limit())?;
    let rhymes = select(
        find_rhymes(&index, word, syllables),
        args.min_score,
        args.limit.or(config.max_results),
    );

    if global_json {
        println!("{}", serde_json::to_string_pretty(&Scoreboard::from(rhymes))?);
    } else if rhymes.is_empty() {
        println!(
            "{}",
            "no rhymes found".if_supports_color(Stdout, |t| t.yellow())
        );
    } else {
        for rhyme in &rhymes {
            println!("{}  {}", format_score(rhyme.score), rhyme.word);
        }
    }

    Ok(())
}

/// Apply the score floor and result cap to a ranked list.
fn select(
    mut rhymes: Vec<ScoredCandidate>,
    min_score: Option<f64>,
    limit: Option<usize>,
) -> Vec<ScoredCandidate> {
    if let Some(min) = min_score {
        rhymes.retain(|r| r.score >= min);
    }
    if let Some(limit) = limit {
        rhymes.truncate(limit);
    }
    rhymes
}

fn format_score(score: f64) -> String {
    let text = format!("{score:.2}");
    if score >= 0.9 {
        text.if_supports_color(Stdout, |t| t.green()).to_string()
    } else if score >= 0.6 {
        text.if_supports_color(Stdout, |t| t.yellow()).to_string()
    } else {
        text.if_supports_color(Stdout, |t| t.dimmed()).to_string()
    }
}

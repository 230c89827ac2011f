//! Analyze command implementation

use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout};
use tracing::{debug, instrument};

use rymownik_core::{WordAnalysis, analyze_word};

use super::validate_word;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Words to analyze.
    #[arg(required = true)]
    pub words: Vec<String>,
}

/// Print syllable count, rhyme ending, stem and index key for each word.
#[instrument(name = "cmd_analyze", skip_all, fields(count = args.words.len()))]
pub fn cmd_analyze(args: AnalyzeArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(words = ?args.words, "executing analyze command");

    let analyses = args
        .words
        .iter()
        .map(|word| validate_word(word).map(analyze_word))
        .collect::<anyhow::Result<Vec<WordAnalysis>>>()?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&analyses)?);
        return Ok(());
    }

    for analysis in &analyses {
        println!("{}", analysis.word.if_supports_color(Stdout, |t| t.bold()));
        println!("  {}: {}", label("Syllables"), analysis.syllables);
        println!(
            "  {}: {}",
            label("Ending"),
            show(&analysis.ending).if_supports_color(Stdout, |t| t.cyan())
        );
        println!("  {}: {}", label("Beginning"), show(&analysis.beginning));
        println!("  {}: {}", label("Key"), analysis.key);
    }

    Ok(())
}

/// Make empty parts visible in text output.
fn show(part: &str) -> &str {
    if part.is_empty() { "(none)" } else { part }
}

fn label(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.dimmed()).to_string()
}

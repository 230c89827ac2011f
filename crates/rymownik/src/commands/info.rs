//! Info command implementation

use camino::Utf8Path;
use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout, Style};
use rymownik_core::config::{Config, ConfigSources};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    dictionary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_limit: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources, cwd: &Utf8Path) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            dictionary: config.dictionary_path(cwd).to_string(),
            max_results: config.max_results,
            input_limit: config.input_limit(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
/// * `cwd` - Directory relative paths resolve against
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    cwd: &Utf8Path,
) -> anyhow::Result<()> {
    let info = PackageInfo::new();

    debug!(json_output = global_json, "executing info command");

    let config_info = ConfigInfo::from_config(config, sources, cwd);
    let full_info = FullInfo {
        package: info,
        config: config_info,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
    } else {
        println!(
            "{} {}",
            full_info.package.name.if_supports_color(Stdout, |t| t.bold()),
            full_info.package.version.if_supports_color(Stdout, |t| t.green())
        );
        if !full_info.package.description.is_empty() {
            println!("{}", full_info.package.description);
        }
        if !full_info.package.license.is_empty() {
            println!("{}: {}", label("License"), full_info.package.license);
        }
        if !full_info.package.repository.is_empty() {
            println!(
                "{}: {}",
                label("Repository"),
                full_info.package.repository.if_supports_color(Stdout, |t| t.cyan())
            );
        }
        if !full_info.package.homepage.is_empty() {
            println!(
                "{}: {}",
                label("Homepage"),
                full_info.package.homepage.if_supports_color(Stdout, |t| t.cyan())
            );
        }

        // Configuration section
        println!();
        println!("{}", heading("Configuration"));
        if let Some(ref path) = full_info.config.config_file {
            println!(
                "{}: {}",
                label("Config file"),
                path.if_supports_color(Stdout, |t| t.cyan())
            );
        } else {
            println!(
                "{}: {}",
                label("Config file"),
                "none loaded".if_supports_color(Stdout, |t| t.yellow())
            );
        }
        println!("{}: {}", label("Log level"), full_info.config.log_level);
        if let Some(ref dir) = full_info.config.log_dir {
            println!("{}: {}", label("Log directory"), dir);
        }

        // Lookup defaults
        println!();
        println!("{}", heading("Lookup"));
        println!(
            "{}: {}",
            label("Dictionary"),
            full_info.config.dictionary.if_supports_color(Stdout, |t| t.cyan())
        );
        print_opt("Max results", full_info.config.max_results.as_ref());
        match full_info.config.input_limit {
            Some(limit) => println!("{}: {} bytes", label("Input limit"), limit),
            None => println!(
                "{}: {}",
                label("Input limit"),
                "disabled".if_supports_color(Stdout, |t| t.yellow())
            ),
        }
    }

    Ok(())
}

/// Dimmed field label, plain when stdout takes no color.
fn label(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.dimmed()).to_string()
}

fn heading(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.style(Style::new().bold().underline()))
        .to_string()
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(name: &str, value: Option<&T>) {
    match value {
        Some(v) => println!("{}: {}", label(name), v),
        None => println!("{}: {}", label(name), label("(not set)")),
    }
}

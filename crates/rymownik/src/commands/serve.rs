//! Serve command implementation

use std::sync::Arc;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use rymownik_core::Config;

use super::{load_index, resolve_dictionary};
use crate::server::RhymeServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Vocabulary file or directory of *.txt word lists.
    #[arg(short, long, value_name = "PATH")]
    pub dictionary: Option<Utf8PathBuf>,
}

/// Build the index once and serve it over MCP on stdio until the client
/// disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(args: ServeArgs, config: Config, cwd: Utf8PathBuf) -> anyhow::Result<()> {
    let dictionary = resolve_dictionary(args.dictionary.as_deref(), &config, &cwd);
    let index = Arc::new(load_index(&dictionary, config.input_limit())?);
    info!(
        dictionary = %dictionary,
        words = index.len(),
        buckets = index.bucket_count(),
        "starting MCP server on stdio"
    );

    let service = RhymeServer::new(index)
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server failed")?;

    info!("MCP server stopped");
    Ok(())
}

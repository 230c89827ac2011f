//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes rhyme lookup over the MCP protocol so AI assistants can query the
//! loaded vocabulary via stdio transport.
//!
//! # Architecture
//!
//! The server is a presentation layer over `rymownik-core`. It owns one
//! read-only [`RhymeIndex`] behind an [`Arc`]; every tool call borrows it and
//! delegates to the same core functions the CLI commands use.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use rymownik_core::{RhymeIndex, Scoreboard, analyze_word, find_rhymes, syllable_count};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `find_rhymes` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FindRhymesParams {
    /// The word to find rhymes for.
    pub word: String,
    /// Syllable count of the rhymes. Defaults to the word's own count.
    pub syllables_count: Option<usize>,
    /// Return at most this many rhymes.
    pub limit: Option<usize>,
}

/// Parameters for the `analyze_word` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeWordParams {
    /// The word to analyze.
    pub word: String,
}

/// MCP server answering rhyme queries against a shared vocabulary index.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct RhymeServer {
    index: Arc<RhymeIndex>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

/// Trim a tool's word argument, rejecting blanks.
fn required_word(word: &str) -> Result<&str, McpError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(McpError::invalid_params("word must not be empty", None));
    }
    Ok(word)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl RhymeServer {
    /// Create a server over an already built index.
    pub fn new(index: Arc<RhymeIndex>) -> Self {
        Self {
            index,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information and index statistics.
    #[tool(description = "Get project name, version, and vocabulary statistics")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let text = if params.format == "json" {
            to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
                "words": self.index.len(),
                "buckets": self.index.bucket_count(),
            }))?
        } else {
            format!(
                "{} v{}\n{}\n{} words in {} rhyme buckets",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
                self.index.len(),
                self.index.bucket_count(),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Rank vocabulary words that rhyme with the given word.
    #[tool(
        description = "Find Polish rhymes for a word. Returns a scoreboard of words with scores from 0 to 1, best first."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn find_rhymes(
        &self,
        Parameters(params): Parameters<FindRhymesParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "find_rhymes",
            syllables = ?params.syllables_count,
            "executing MCP tool"
        );

        let word = required_word(&params.word)?;
        let syllables = params
            .syllables_count
            .unwrap_or_else(|| syllable_count(word));

        let mut rhymes = find_rhymes(&self.index, word, syllables);
        if let Some(limit) = params.limit {
            rhymes.truncate(limit);
        }
        let count = rhymes.len();
        let json = to_json(&Scoreboard::from(rhymes))?;

        tracing::info!(tool = "find_rhymes", count, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Show how a word is segmented for rhyming.
    #[tool(
        description = "Analyze a Polish word: syllable count, rhyme ending, word beginning, and index key."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_word(
        &self,
        Parameters(params): Parameters<AnalyzeWordParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_word", "executing MCP tool");

        let analysis = analyze_word(required_word(&params.word)?);
        let json = to_json(&analysis)?;

        tracing::info!(tool = "analyze_word", key = %analysis.key, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for RhymeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use find_rhymes to rank Polish rhymes for a word \
                 and analyze_word to inspect how a word is segmented.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

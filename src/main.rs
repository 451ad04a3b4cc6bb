//! Overview server - binary entry point
//!
//! Loads the corpus once, then serves it over MCP stdio or the REST API
//! depending on `OVERVIEW_MODE`.

use std::sync::Arc;

use overview::api::{self, AppState};
use overview::config::{Config, ServeMode};
use overview::corpus::{load_corpus_file, CorpusStore};
use overview::server::McpServer;
use overview::tools::register_all_tools;
use overview::types::McpResult;
use overview::ServerInfo;

#[tokio::main]
async fn main() -> McpResult<()> {
    // stdout carries the JSON-RPC stream, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let store = Arc::new(CorpusStore::new());

    // A failed load leaves the session running on an empty corpus
    match load_corpus_file(&config.content_path, config.field_policy).await {
        Ok(corpus) => store.install(corpus)?,
        Err(e) => tracing::error!(
            path = %config.content_path.display(),
            error = %e,
            "Failed to load corpus; continuing with an empty corpus"
        ),
    }

    match config.mode {
        ServeMode::Http => {
            let state = Arc::new(AppState::new(store));
            api::serve(config.http_addr, state).await?;
        }
        ServeMode::Stdio => {
            tokio::task::spawn_blocking(move || {
                let mut server = McpServer::with_info(ServerInfo::default());
                register_all_tools(&mut server, store);
                server.run()
            })
            .await??;
        }
    }

    Ok(())
}

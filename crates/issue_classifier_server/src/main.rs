//! issue_classifier_server: standalone REST server for the issue classifier.
//!
//! See `config` for the flags and env vars it reads.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use issue_classifier_core::Classifier;
use issue_classifier_server::config::ServerConfig;
use issue_classifier_server::router::build_router;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .init();

    // Built once, shared read-only by every request
    let classifier = Arc::new(Classifier::default());
    tracing::info!(
        rules = classifier.all_rules().len(),
        "Rule catalog loaded"
    );

    let app = build_router(classifier);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    tracing::info!("issue_classifier_server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

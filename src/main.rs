//! Repo Grader - review every source file in a public GitHub repository
//! with Gemini and aggregate the scores.
//!
//! # Usage
//! ```bash
//! GEMINI_API_KEY=... repo-grader             # Serve on port 5000
//! GEMINI_API_KEY=... repo-grader --port 8080 # Custom port (or PORT env var)
//! ```

mod error;
mod github;
mod models;
mod review;
mod routes;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use github::GitHubClient;
use review::{Evaluator, GeminiClient};

/// Repo Grader - LLM-backed review of public GitHub repositories
#[derive(Parser)]
#[command(name = "repo-grader")]
#[command(about = "Score public GitHub repositories with an LLM reviewer", long_about = None)]
struct Cli {
    /// Port to run the server on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_key = std::env::var("GEMINI_API_KEY")
        .context("GEMINI_API_KEY not set; review requests need an API key")?;

    let evaluator = Arc::new(Evaluator::new(
        GitHubClient::new()?,
        GeminiClient::new(api_key),
    ));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(evaluator)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to port {}", cli.port))?;

    tracing::info!("listening on http://{addr}");

    // Set up graceful shutdown
    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        tracing::info!("shutting down");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

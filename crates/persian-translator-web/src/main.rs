//! Persian Translator Web - Web server for translating text into Persian.

mod routes;
mod state;
mod templates;

use anyhow::{Context, Result};
use clap::Parser;
use persian_translator_core::{AppConfig, TranslatorConfig, DEFAULT_API_BASE, DEFAULT_MODEL};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "persian-translator-web")]
#[command(author, version, about = "Persian Translator Web Server", long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// API base URL for the OpenAI-compatible endpoint
    #[arg(long, env = "OPENROUTER_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// API key for the DeepSeek model on OpenRouter
    #[arg(long, env = "DEEPSEEK_API_KEY")]
    api_key: Option<String>,

    /// Model name for the OpenAI-compatible API
    #[arg(long, env = "TRANSLATOR_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before parsing args so env vars are available)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    if args.api_key.is_none() {
        tracing::warn!("DEEPSEEK_API_KEY is not set; translation requests will be rejected upstream");
    }

    // Create application state (builds the translator once)
    let config = AppConfig {
        translator: TranslatorConfig::new(args.api_base, args.api_key, args.model),
    };
    let state =
        Arc::new(AppState::new(config).context("Failed to initialize application state")?);

    info!(
        "Using model {} at {}",
        state.config.translator.model, state.config.translator.api_base
    );

    let app = routes::router(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Superior Chatbot API entry point.
//!
//! Binary name: `superiord`
//!
//! Parses CLI arguments, initializes the database and chat service, then
//! serves the REST API until Ctrl+C or SIGTERM.

use anyhow::Context;
use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use superior_api::config::ApiConfig;
use superior_api::http::router::build_router;
use superior_api::state::AppState;
use superior_infra::sqlite::pool::default_database_url;

/// Superior Chatbot API server.
#[derive(Debug, Parser)]
#[command(name = "superiord", version, about = "Lead-qualification chatbot API")]
struct Args {
    /// Host to bind the HTTP listener.
    #[arg(long, env = "SUPERIOR_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the HTTP listener.
    #[arg(long, env = "SUPERIOR_PORT", default_value_t = 8000)]
    port: u16,

    /// SQLite database URL; defaults to a file under the data directory.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap so env-backed arguments see its values.
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Set up tracing based on verbosity
    let filter = match args.verbose {
        0 => "warn",
        1 => "info,superior_api=debug,superior_core=debug,superior_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let openai_api_key = std::env::var("OPENAI_API_KEY")
        .map(SecretString::from)
        .context("OPENAI_API_KEY is not set")?;

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        database_url: args.database_url.unwrap_or_else(default_database_url),
        openai_api_key,
    };

    let state = AppState::init(&config).await?;

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Superior Chatbot API listening");

    let router = build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

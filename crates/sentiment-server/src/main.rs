//! Binary entrypoint for the sentiment HTTP server.
//!
//! Reads configuration from `SENTIMENT_*` environment variables (see
//! [`sentiment_server::config`]) and the log filter from `RUST_LOG`.

use std::process;

use sentiment_server::config::ServerConfig;
use sentiment_server::server;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "sentiment_server=info,tower_http=info";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let result = match ServerConfig::from_env() {
        Ok(config) => server::run(config).await,
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        tracing::error!("{}", err);
        process::exit(1);
    }
}

//! docperm REST API Server
//!
//! Run with: cargo run --features server --bin docperm-server
//!
//! Endpoints:
//!   GET  /health                        - Health check
//!   POST /document/permissions/decode   - Permission rows -> summary
//!   POST /document/permissions/encode   - Summary -> permission rows
//!   POST /document/permissions/any      - Does the summary grant anything

use docperm::server::{serve, ServerConfig, USAGE};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docperm=debug,tower_http=debug".into()),
        )
        .init();

    let cfg = match ServerConfig::from_env().and_then(|c| c.apply_args(std::env::args().skip(1))) {
        Ok(Some(cfg)) => cfg,
        Ok(None) => {
            println!("{}", USAGE);
            return;
        }
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    if let Err(e) = serve(&cfg).await {
        tracing::error!(error = %e, addr = %cfg.addr(), "server failed");
        std::process::exit(1);
    }
}

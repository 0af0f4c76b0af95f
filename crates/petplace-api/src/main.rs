//! Petplace API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p petplace-api
//! ```
//!
//! Configuration is loaded from environment variables (a `.env` file is
//! honored in development).

use petplace_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so tracing can match the environment
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let tracing_config = TracingConfig::for_environment(config.app.env);
    if let Err(e) = try_init_tracing_with_config(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    if let Err(e) = petplace_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

//! Web-app entry point.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use web_app::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    api::log_startup("web-app");

    // 2. Mount and render the view
    match web_app::run(Config::from_env()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The view rendered without a response line; the error only
            // reaches the log and the exit code.
            tracing::warn!(error = %err, "could not reach backend");
            ExitCode::FAILURE
        }
    }
}

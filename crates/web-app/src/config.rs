//! Web-app configuration.

/// Backend base URL baked in at compile time.
///
/// Development builds talk to the local server; the `production` feature
/// switches to the deployed backend.
#[cfg(not(feature = "production"))]
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
#[cfg(feature = "production")]
pub const DEFAULT_BACKEND_URL: &str = "https://some-real-server";

/// Runtime configuration with the compile-time default as fallback.
///
/// Reads from environment variables:
/// - `BACKEND_URL` — backend base URL (default: [`DEFAULT_BACKEND_URL`])
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            backend_url: std::env::var("BACKEND_URL")
                .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

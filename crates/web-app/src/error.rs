//! View error type.

use thiserror::Error;

/// Errors surfaced while mounting the view.
///
/// The view itself never renders these; a failed fetch just leaves the
/// rendered output without a response line.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The request to the backend failed or the body was not the expected
    /// payload shape.
    #[error("backend request failed: {0}")]
    Request(#[from] reqwest::Error),
}

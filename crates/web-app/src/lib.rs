//! Front-end view for the ping-pong scaffold.
//!
//! One component: it fetches the payload from the backend once and renders
//! it as text. No retry, no error display, no cancellation.

pub mod config;
pub mod error;
pub mod view;

pub use error::ViewError;
pub use view::PingView;

use config::Config;

/// Builds the view, mounts it, and prints the rendered text.
///
/// The rendered output never shows an error; a failed mount just leaves
/// the response line out, and the error is returned to the caller so the
/// binary can exit nonzero.
pub async fn run(config: Config) -> Result<(), ViewError> {
    let mut view = PingView::new(config.backend_url);
    let result = view.mount().await;
    print!("{}", view.render());
    result
}

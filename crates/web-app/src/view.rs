//! The ping view component.

use api::PingPongPayload;

use crate::error::ViewError;

/// Fetches the payload from the backend once and renders it as text.
///
/// Holds the response as `Option` so rendering before (or without) a
/// successful fetch shows the heading alone.
#[derive(Debug, Clone)]
pub struct PingView {
    client: reqwest::Client,
    base_url: String,
    response: Option<PingPongPayload>,
}

impl PingView {
    /// Creates an unmounted view pointed at the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            response: None,
        }
    }

    /// Performs the one fetch and stores the payload.
    ///
    /// The single await point of the whole app. If the backend never
    /// responds this future never completes and the view stays in the
    /// no-response state.
    pub async fn mount(&mut self) -> Result<(), ViewError> {
        let url = format!("{}/ping", self.base_url);
        tracing::debug!(%url, "fetching payload");

        let payload: PingPongPayload = self.client.get(&url).send().await?.json().await?;

        tracing::debug!(ping = %payload.ping, "response received");
        self.response = Some(payload);
        Ok(())
    }

    /// Returns the stored payload, if the fetch has resolved.
    pub fn response(&self) -> Option<&PingPongPayload> {
        self.response.as_ref()
    }

    /// Renders the view as text.
    pub fn render(&self) -> String {
        let mut out = String::from("Hello World!\n");
        if let Some(payload) = &self.response {
            out.push_str(&format!("response from server: {}\n", payload.ping));
        }
        out
    }
}

//! Shared contract between the server and the web-app.
//!
//! Both sides depend on this crate so the wire shape is defined exactly
//! once.

use serde::{Deserialize, Serialize};

/// The one payload the backend serves.
///
/// Serializes to exactly `{"ping":"pong"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingPongPayload {
    pub ping: String,
}

impl PingPongPayload {
    /// Creates the fixed response value.
    pub fn pong() -> Self {
        Self {
            ping: "pong".to_string(),
        }
    }
}

/// Emits the shared startup log line.
///
/// Called by every binary in the workspace on launch.
pub fn log_startup(component: &str) {
    tracing::info!(component, "starting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pong_serializes_to_fixed_json() {
        let payload = PingPongPayload::pong();
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"ping":"pong"}"#);
    }

    #[test]
    fn payload_deserializes_from_wire_form() {
        let payload: PingPongPayload = serde_json::from_str(r#"{"ping":"pong"}"#).unwrap();
        assert_eq!(payload, PingPongPayload::pong());
    }

    #[test]
    fn payload_rejects_missing_field() {
        let result = serde_json::from_str::<PingPongPayload>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn log_startup_names_component_once() {
        use std::sync::{Arc, Mutex};
        use tracing_subscriber::fmt::MakeWriter;

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl std::io::Write for Capture {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        impl<'a> MakeWriter<'a> for Capture {
            type Writer = Capture;

            fn make_writer(&'a self) -> Self::Writer {
                self.clone()
            }
        }

        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || log_startup("web-app"));

        let out = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("starting"));
        assert!(out.contains(r#"component="web-app""#));
        // The component appears as the structured field only, not in the message.
        assert_eq!(out.matches("web-app").count(), 1);
    }
}

//! Error types for the generation client.

use thiserror::Error;

/// Fallback shown when a transport error carries no usable message.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to generate a draft. Please check the connection or backend server.";

/// Errors that can occur while requesting a draft from the backend.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The backend responded with a non-2xx status. `message` holds the
    /// body's `error` field when the body parsed as JSON and carried one.
    #[error("backend returned status {status}")]
    Backend { status: u16, message: Option<String> },

    /// The request could not complete (no response received).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend reported success but the body had no usable `draft`.
    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

impl GenerateError {
    /// User-facing message for display in the output panel.
    ///
    /// Backend errors prefer the body's own `error` text and fall back to a
    /// message carrying the HTTP status code. Transport errors surface the
    /// underlying error's message, with a generic fallback if it is empty.
    pub fn user_message(&self) -> String {
        match self {
            GenerateError::Backend {
                message: Some(message),
                ..
            } => message.clone(),
            GenerateError::Backend {
                status,
                message: None,
            } => format!("HTTP error! status: {}", status),
            GenerateError::Network(source) => {
                let message = source.to_string();
                if message.is_empty() {
                    GENERIC_FAILURE_MESSAGE.to_string()
                } else {
                    message
                }
            }
            GenerateError::InvalidResponse(detail) => {
                format!("Backend returned an unexpected response: {}", detail)
            }
        }
    }
}

//! Error types for the Firecrawl product extraction client.

use serde::Serialize;
use thiserror::Error;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the extraction client.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error, detected before any network activity.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API answered at the transport level but reported failure.
    #[error("Extraction rejected by API: {message}")]
    Rejected {
        /// Message reported by the API, or "Unknown error" if it gave none.
        message: String,
    },

    /// The API returned a non-success HTTP status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Network or HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    ///
    /// No internal path produces this; it exists as a public conversion so
    /// callers re-serializing extraction results can use `?` with this
    /// crate's [`Result`].
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,
}

/// Coarse failure category, one per propagation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// Missing or invalid local configuration; never reaches the wire.
    ConfigurationError,
    /// The service responded but declined to extract.
    RemoteRejection,
    /// DNS, connection, timeout, HTTP-status or decoding failure.
    TransportFailure,
}

impl Error {
    /// Classify this error into one of the three failure categories.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::ConfigurationError,
            Error::Rejected { .. } => ErrorKind::RemoteRejection,
            Error::Api { .. } | Error::Http(_) | Error::Json(_) | Error::Timeout => {
                ErrorKind::TransportFailure
            }
        }
    }

    /// Render this error as a structured JSON object suitable for printing.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "kind": self.kind(),
                "message": self.to_string(),
            }
        })
    }

    /// Create an API error from an unsuccessful response.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();

        let body: std::result::Result<ErrorResponse, _> = response.json().await;
        let message = match body {
            Ok(err) => err.error.unwrap_or_else(|| "Unknown error".into()),
            Err(_) => "Unknown error".into(),
        };

        Error::Api { status, message }
    }
}

#[derive(serde::Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

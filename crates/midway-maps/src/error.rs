use thiserror::Error;

/// Errors returned by the maps capability adapters.
#[derive(Debug, Error)]
pub enum MapsError {
    /// Network or TLS failure, timeout, or non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Maps API answered with a status other than `OK` or `ZERO_RESULTS`.
    #[error("Maps API error {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Api {
        status: String,
        message: Option<String>,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

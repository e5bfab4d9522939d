use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum CineError {
    /// The HTTP request could not be completed (connection refused, DNS, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered with a non-success HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A body or blob was not valid JSON, or did not match the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data was well-formed JSON but unusable (empty listing, missing field).
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// Reading or writing the history store failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A blocking store write was cancelled or panicked.
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The configuration file could not be parsed.
    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}


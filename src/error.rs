use reqwest::StatusCode;

/// Errors produced by calls to the users REST API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, I/O, or body read failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
    /// The response body did not have the expected shape.
    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// Anything a non-HTTP `UserApi` implementation wants to report.
    #[error("{0}")]
    Other(String),
}

impl ApiError {
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Result type used by the binary and the event loop.
pub type Result<T> = anyhow::Result<T>;

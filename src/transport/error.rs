//! Transport layer error types.

/// Transport error.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection-level failure.
    #[error("Connection error: {0}")]
    Connection(String),
    /// The request timed out.
    #[error("Timeout")]
    Timeout,
    /// The server responded with a non-success status.
    #[error("HTTP status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// Any other request failure, including mid-stream read errors.
    #[error("Request error: {0}")]
    Request(String),
}

//! Main error type for the document-chat client.

use super::categories::*;
use crate::transport::TransportError;
use thiserror::Error;

/// Result type alias for document-chat operations.
pub type ChatResult<T> = Result<T, ChatError>;

/// Top-level error type for the document-chat client.
#[derive(Error, Debug, Clone)]
pub enum ChatError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Request error.
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Network error.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Stream error.
    #[error("Stream error: {0}")]
    Stream(#[from] StreamError),

    /// Response error.
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Upload error.
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),
}

impl ChatError {
    /// Returns true if the request failed before any answer text streamed.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, ChatError::Request(RequestError::Failed { .. }))
    }

    /// Returns true if the connection dropped mid-stream.
    pub fn is_stream_interruption(&self) -> bool {
        matches!(self, ChatError::Stream(StreamError::Interrupted { .. }))
    }
}

impl From<TransportError> for ChatError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Status { status, body } => {
                ChatError::Request(RequestError::Failed { status, body })
            }
            TransportError::Timeout => ChatError::Network(NetworkError::Timeout),
            TransportError::Connection(message) => {
                ChatError::Network(NetworkError::ConnectionFailed { message })
            }
            TransportError::Request(message) => {
                ChatError::Network(NetworkError::ConnectionFailed { message })
            }
        }
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::Response(ResponseError::Deserialization {
            message: err.to_string(),
        })
    }
}

impl From<url::ParseError> for ChatError {
    fn from(err: url::ParseError) -> Self {
        ChatError::Configuration(ConfigurationError::InvalidBaseUrl {
            url: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_request_failure() {
        let failed = ChatError::Request(RequestError::Failed {
            status: 500,
            body: "boom".to_string(),
        });
        assert!(failed.is_request_failure());
        assert!(!failed.is_stream_interruption());

        let empty = ChatError::Request(RequestError::EmptyQuery);
        assert!(!empty.is_request_failure());
    }

    #[test]
    fn test_is_stream_interruption() {
        let interrupted = ChatError::Stream(StreamError::Interrupted {
            message: "connection reset".to_string(),
            partial_text_delivered: true,
        });
        assert!(interrupted.is_stream_interruption());
        assert!(!interrupted.is_request_failure());
    }

    #[test]
    fn test_transport_status_maps_to_request_failure() {
        let err = ChatError::from(TransportError::Status {
            status: 404,
            body: "not found".to_string(),
        });
        assert!(err.is_request_failure());
    }

    #[test]
    fn test_transport_timeout_maps_to_network() {
        let err = ChatError::from(TransportError::Timeout);
        assert!(matches!(err, ChatError::Network(NetworkError::Timeout)));
    }
}

//! Error category types for granular error handling.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    /// The configured base URL could not be parsed.
    #[error("Invalid base URL: {url}")]
    InvalidBaseUrl {
        /// The offending URL string.
        url: String,
    },

    /// A configuration value is invalid.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Description of the problem.
        message: String,
    },
}

/// Request-level errors.
#[derive(Error, Debug, Clone)]
pub enum RequestError {
    /// The server was reachable but responded with an error status before
    /// any answer text was streamed.
    #[error("Request failed with status {status}")]
    Failed {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Raw response body, if any. The backend guarantees no schema here.
        body: String,
    },

    /// The query was empty or whitespace-only.
    #[error("Query is empty")]
    EmptyQuery,

    /// The query exceeds the maximum accepted length.
    #[error("Query too long: {length} bytes (max: {max})")]
    QueryTooLong {
        /// Actual query length in bytes.
        length: usize,
        /// Maximum accepted length in bytes.
        max: usize,
    },
}

/// Network-related errors.
#[derive(Error, Debug, Clone)]
pub enum NetworkError {
    /// The connection could not be established.
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Description from the underlying transport.
        message: String,
    },

    /// The request timed out.
    #[error("Request timed out")]
    Timeout,
}

/// Streaming errors.
#[derive(Error, Debug, Clone)]
pub enum StreamError {
    /// The connection dropped while the answer was still streaming.
    ///
    /// Fragments delivered before the failure have already reached the
    /// caller; the interruption is necessarily partial, never atomic.
    #[error("Stream interrupted: {message}")]
    Interrupted {
        /// Description from the underlying transport.
        message: String,
        /// Whether any answer text was delivered before the failure.
        partial_text_delivered: bool,
    },
}

/// Response parsing errors.
#[derive(Error, Debug, Clone)]
pub enum ResponseError {
    /// The response body could not be deserialized.
    #[error("Failed to deserialize response: {message}")]
    Deserialization {
        /// Description of the parse failure.
        message: String,
    },

    /// The response had an unexpected shape.
    #[error("Unexpected response format: {message}")]
    UnexpectedFormat {
        /// Description of the mismatch.
        message: String,
    },
}

/// Upload errors.
#[derive(Error, Debug, Clone)]
pub enum UploadError {
    /// The backend rejected the upload.
    #[error("Upload rejected ({status}): {detail}")]
    Rejected {
        /// HTTP status code returned by the backend.
        status: u16,
        /// The `detail` field of the error body, or the raw body.
        detail: String,
    },

    /// The file data was empty.
    #[error("File is empty: {file_name}")]
    EmptyFile {
        /// Name of the offending file.
        file_name: String,
    },

    /// No file name was provided.
    #[error("File name is missing")]
    MissingFileName,

    /// The file exceeds the maximum accepted size.
    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge {
        /// Actual file size in bytes.
        size: usize,
        /// Maximum accepted size in bytes.
        max_size: usize,
    },

    /// The file could not be read from disk.
    #[error("Failed to read file {path}: {message}")]
    Read {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O error description.
        message: String,
    },
}

//! Error types for the document-chat client.
//!
//! The taxonomy distinguishes failures that happen before any answer text
//! was streamed (`RequestError::Failed`) from failures that interrupt an
//! in-progress stream (`StreamError::Interrupted`).

mod categories;
mod types;

pub use categories::{
    ConfigurationError, NetworkError, RequestError, ResponseError, StreamError, UploadError,
};
pub use types::{ChatError, ChatResult};

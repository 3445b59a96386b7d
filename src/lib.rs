//! # Document-Chat Client
//!
//! Production-ready Rust client for a streaming document-chat (RAG) backend.
//!
//! ## Features
//!
//! - Incremental answer streaming: the response body is read in
//!   arbitrary-sized byte chunks and decoded with a stateful UTF-8 decoder,
//!   so multi-byte characters split across chunk boundaries arrive intact
//! - Query sessions with supersession: a new query invalidates the output of
//!   a still-in-flight previous query without corrupting the visible answer
//! - Document upload for indexing (multipart, single-shot)
//! - Backend health probing
//! - Comprehensive error taxonomy distinguishing "failed before streaming"
//!   from "failed mid-stream"
//! - Structured logging via `tracing`
//! - Transport abstraction with mock support for testing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docchat_client::{create_client, ChatConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ChatConfig::builder()
//!         .base_url("http://localhost:8000")?
//!         .build()?;
//!
//!     let client = create_client(config)?;
//!
//!     let session = client.session();
//!     session.submit("what is in doc A?").await;
//!     println!("{}", session.answer());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `client` - Main client interface and factory functions
//! - `config` - Configuration types and builder
//! - `transport` - HTTP transport layer and chunked streaming
//! - `streaming` - Stateful UTF-8 decoding of streamed response bodies
//! - `session` - Query sessions with answer accumulation and supersession
//! - `services` - Service implementations (chat, upload, health)
//! - `error` - Error types and taxonomy
//! - `types` - Request/response types

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod services;
pub mod session;
pub mod streaming;
pub mod transport;
pub mod types;

// Development/testing modules - always available for integration tests
pub mod fixtures;
pub mod mocks;

// Re-exports for convenience
pub use client::{create_client, create_client_from_env, DocChatClient, DocChatClientImpl};
pub use config::{
    ChatConfig, ChatConfigBuilder, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_TIMEOUT_SECS,
};
pub use error::{
    ChatError, ChatResult, ConfigurationError, NetworkError, RequestError, ResponseError,
    StreamError, UploadError,
};
pub use session::{QuerySession, CONNECTION_ERROR_MARKER};
pub use streaming::{AnswerStream, StreamTextDecoder};
pub use transport::{
    ChunkedStream, HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBuilder,
    ReqwestTransport, TransportError,
};

// Type re-exports
pub use types::{ApiErrorBody, HealthStatus, UploadFileRequest, UploadOutcome};

// Service re-exports
pub use services::{
    ChatService, ChatServiceImpl, HealthService, HealthServiceImpl, UploadService,
    UploadServiceImpl,
};

// Observability re-exports
pub use observability::{LogFormat, LogLevel, LoggingConfig};

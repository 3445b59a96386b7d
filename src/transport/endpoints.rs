//! Endpoint path constants for the document-chat backend.
//!
//! The backend exposes a fixed, unversioned surface:
//!
//! - `POST /chat?query=<url-encoded text>` — streamed plain-text answer
//! - `POST /upload` — multipart document upload
//! - `GET /` — health check

/// Path for the streaming chat endpoint.
pub const CHAT: &str = "/chat";

/// Path for the document upload endpoint.
pub const UPLOAD: &str = "/upload";

/// Path for the health check endpoint.
pub const HEALTH: &str = "/";

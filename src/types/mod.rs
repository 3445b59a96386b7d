//! Request and response types for the document-chat backend.

use serde::Deserialize;
use std::path::Path;

use crate::error::{ChatResult, UploadError};

/// Outcome of a successful document upload.
///
/// The backend responds with the number of text chunks indexed from the
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadOutcome {
    /// Number of chunks indexed.
    pub chunks: u64,
}

/// Backend health status, from `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    /// Service status, e.g. `"running"`.
    pub status: String,
    /// Name of the model serving answers.
    pub model: String,
}

/// Error body returned by the backend on upload failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable failure description.
    pub detail: String,
}

/// A document to upload for indexing.
#[derive(Debug, Clone)]
pub struct UploadFileRequest {
    /// File name sent in the multipart part.
    pub file_name: String,
    /// MIME type of the file contents.
    pub mime_type: String,
    /// Raw file bytes.
    pub data: Vec<u8>,
}

impl UploadFileRequest {
    /// Create an upload request from in-memory data.
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Create an upload request by reading a file from disk.
    ///
    /// The MIME type is inferred from the file extension; unknown
    /// extensions fall back to `application/octet-stream`.
    pub fn from_path(path: impl AsRef<Path>) -> ChatResult<Self> {
        let path = path.as_ref();

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or(UploadError::MissingFileName)?;

        let data = std::fs::read(path).map_err(|e| UploadError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mime_type = mime_for_extension(
            path.extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default()
                .as_str(),
        );

        Ok(Self {
            file_name,
            mime_type,
            data,
        })
    }
}

/// Infer a MIME type from a file extension.
fn mime_for_extension(extension: &str) -> String {
    match extension.to_ascii_lowercase().as_str() {
        "pdf" => mime::APPLICATION_PDF.to_string(),
        "txt" => mime::TEXT_PLAIN.to_string(),
        "md" => "text/markdown".to_string(),
        "json" => mime::APPLICATION_JSON.to_string(),
        _ => mime::APPLICATION_OCTET_STREAM.to_string(),
    }
}

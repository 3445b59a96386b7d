//! Upload service: single-shot document indexing.

mod service;
mod validation;

pub use service::UploadServiceImpl;
pub use validation::MAX_FILE_SIZE;

use async_trait::async_trait;

use crate::error::ChatResult;
use crate::types::{UploadFileRequest, UploadOutcome};

/// Document upload interface.
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Upload a document for indexing.
    ///
    /// On success the backend reports how many text chunks it indexed. On
    /// failure the backend's `detail` message is surfaced via
    /// [`crate::error::UploadError::Rejected`].
    async fn upload(&self, request: UploadFileRequest) -> ChatResult<UploadOutcome>;
}

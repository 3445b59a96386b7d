//! Request validation for the upload service.

use crate::error::{ChatResult, UploadError};
use crate::types::UploadFileRequest;

/// Maximum accepted file size (50 MiB).
pub const MAX_FILE_SIZE: usize = 50 * 1024 * 1024;

/// Validate an upload request before sending it to the backend.
pub fn validate_upload_request(request: &UploadFileRequest) -> ChatResult<()> {
    if request.file_name.trim().is_empty() {
        return Err(UploadError::MissingFileName.into());
    }

    if request.data.is_empty() {
        return Err(UploadError::EmptyFile {
            file_name: request.file_name.clone(),
        }
        .into());
    }

    if request.data.len() > MAX_FILE_SIZE {
        return Err(UploadError::FileTooLarge {
            size: request.data.len(),
            max_size: MAX_FILE_SIZE,
        }
        .into());
    }

    Ok(())
}

//! Upload service implementation.

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use uuid::Uuid;

use super::validation::validate_upload_request;
use super::UploadService;
use crate::config::ChatConfig;
use crate::error::{ChatError, ChatResult, UploadError};
use crate::transport::{endpoints, HttpTransport, RequestBuilder};
use crate::types::{ApiErrorBody, UploadFileRequest, UploadOutcome};

/// Implementation of the upload service.
pub struct UploadServiceImpl {
    transport: Arc<dyn HttpTransport>,
    request_builder: RequestBuilder,
}

impl UploadServiceImpl {
    /// Create a new upload service.
    pub fn new(config: Arc<ChatConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            request_builder: RequestBuilder::new(config.base_url.clone()),
            transport,
        }
    }

    /// Assemble the multipart/form-data body with a single `file` part.
    fn multipart_body(request: &UploadFileRequest, boundary: &str) -> Vec<u8> {
        let mut body = Vec::with_capacity(request.data.len() + 256);

        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
                request.file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", request.mime_type).as_bytes());
        body.extend_from_slice(&request.data);
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

        body
    }
}

#[async_trait]
impl UploadService for UploadServiceImpl {
    async fn upload(&self, request: UploadFileRequest) -> ChatResult<UploadOutcome> {
        validate_upload_request(&request)?;

        let boundary = format!("docchat-{}", Uuid::new_v4().simple());
        let body = Self::multipart_body(&request, &boundary);
        let http_request =
            self.request_builder
                .multipart_request(endpoints::UPLOAD, &boundary, Bytes::from(body))?;

        tracing::debug!(
            file = %request.file_name,
            size = request.data.len(),
            "uploading document"
        );

        let response = self
            .transport
            .send(http_request)
            .await
            .map_err(ChatError::from)?;

        if (200..300).contains(&response.status) {
            let outcome: UploadOutcome = serde_json::from_slice(&response.body)?;
            tracing::info!(
                file = %request.file_name,
                chunks = outcome.chunks,
                "document indexed"
            );
            Ok(outcome)
        } else {
            let detail = serde_json::from_slice::<ApiErrorBody>(&response.body)
                .map(|b| b.detail)
                .unwrap_or_else(|_| String::from_utf8_lossy(&response.body).into_owned());

            tracing::warn!(
                file = %request.file_name,
                status = response.status,
                detail = %detail,
                "upload rejected"
            );

            Err(UploadError::Rejected {
                status: response.status,
                detail,
            }
            .into())
        }
    }
}

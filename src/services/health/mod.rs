//! Health service: backend liveness probe.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ChatConfig;
use crate::error::{ChatError, ChatResult, RequestError};
use crate::transport::{endpoints, HttpTransport, RequestBuilder};
use crate::types::HealthStatus;

/// Backend health interface.
#[async_trait]
pub trait HealthService: Send + Sync {
    /// Probe the backend root endpoint and report its status.
    async fn check(&self) -> ChatResult<HealthStatus>;
}

/// Implementation of the health service.
pub struct HealthServiceImpl {
    transport: Arc<dyn HttpTransport>,
    request_builder: RequestBuilder,
}

impl HealthServiceImpl {
    /// Create a new health service.
    pub fn new(config: Arc<ChatConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            request_builder: RequestBuilder::new(config.base_url.clone()),
            transport,
        }
    }
}

#[async_trait]
impl HealthService for HealthServiceImpl {
    async fn check(&self) -> ChatResult<HealthStatus> {
        let request = self.request_builder.get_request(endpoints::HEALTH)?;

        let response = self
            .transport
            .send(request)
            .await
            .map_err(ChatError::from)?;

        if (200..300).contains(&response.status) {
            Ok(serde_json::from_slice(&response.body)?)
        } else {
            Err(RequestError::Failed {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockHttpTransport;
    use crate::transport::HttpMethod;

    #[tokio::test]
    async fn test_check_parses_status() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.enqueue_json_response(200, r#"{"status":"running","model":"qwen2:0.5b"}"#);

        let service = HealthServiceImpl::new(Arc::new(ChatConfig::default()), transport.clone());
        let status = service.check().await.unwrap();

        assert_eq!(status.status, "running");
        assert_eq!(status.model, "qwen2:0.5b");
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
    }

    #[tokio::test]
    async fn test_check_maps_error_status() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.enqueue_json_response(503, "unavailable");

        let service = HealthServiceImpl::new(Arc::new(ChatConfig::default()), transport);
        let err = service.check().await.unwrap_err();

        assert!(err.is_request_failure());
    }
}

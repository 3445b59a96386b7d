//! Client interface and factory functions for the document-chat backend.

use std::sync::Arc;

use crate::config::ChatConfig;
use crate::error::{ChatError, ChatResult};
use crate::services::{
    ChatService, ChatServiceImpl, HealthService, HealthServiceImpl, UploadService,
    UploadServiceImpl,
};
use crate::session::QuerySession;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Trait defining the main document-chat client interface.
pub trait DocChatClient: Send + Sync {
    /// Access the streaming chat service.
    fn chat(&self) -> Arc<dyn ChatService>;

    /// Access the document upload service.
    fn uploads(&self) -> Arc<dyn UploadService>;

    /// Access the health service.
    fn health(&self) -> Arc<dyn HealthService>;

    /// Create a query session bound to this client's chat service.
    fn session(&self) -> QuerySession {
        QuerySession::new(self.chat())
    }
}

/// Implementation of the document-chat client.
///
/// Services share one transport and are constructed eagerly; the client is
/// cheap to clone service handles from.
pub struct DocChatClientImpl {
    config: Arc<ChatConfig>,
    chat: Arc<ChatServiceImpl>,
    uploads: Arc<UploadServiceImpl>,
    health: Arc<HealthServiceImpl>,
}

impl DocChatClientImpl {
    /// Create a new client from configuration.
    pub fn new(config: ChatConfig) -> ChatResult<Self> {
        let transport = Arc::new(
            ReqwestTransport::new(config.timeout, config.connect_timeout)
                .map_err(ChatError::from)?,
        ) as Arc<dyn HttpTransport>;

        Ok(Self::with_transport(config, transport))
    }

    /// Create a new client with a custom transport (used in tests).
    pub fn with_transport(config: ChatConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let config = Arc::new(config);

        Self {
            chat: Arc::new(ChatServiceImpl::new(config.clone(), transport.clone())),
            uploads: Arc::new(UploadServiceImpl::new(config.clone(), transport.clone())),
            health: Arc::new(HealthServiceImpl::new(config.clone(), transport)),
            config,
        }
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }
}

impl DocChatClient for DocChatClientImpl {
    fn chat(&self) -> Arc<dyn ChatService> {
        self.chat.clone()
    }

    fn uploads(&self) -> Arc<dyn UploadService> {
        self.uploads.clone()
    }

    fn health(&self) -> Arc<dyn HealthService> {
        self.health.clone()
    }
}

impl std::fmt::Debug for DocChatClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocChatClientImpl")
            .field("config", &self.config)
            .finish()
    }
}

/// Create a client from configuration.
pub fn create_client(config: ChatConfig) -> ChatResult<Arc<dyn DocChatClient>> {
    let client = DocChatClientImpl::new(config)?;
    Ok(Arc::new(client))
}

/// Create a client from environment variables.
///
/// Reads `DOCCHAT_BASE_URL`; everything else uses the defaults.
pub fn create_client_from_env() -> ChatResult<Arc<dyn DocChatClient>> {
    let config = ChatConfig::from_env()?;
    create_client(config)
}

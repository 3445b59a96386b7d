//! Chat service implementation.

use async_trait::async_trait;
use futures::StreamExt;
use std::sync::Arc;

use super::validation::validate_query;
use super::ChatService;
use crate::config::ChatConfig;
use crate::error::{ChatError, ChatResult};
use crate::streaming::AnswerStream;
use crate::transport::{HttpTransport, RequestBuilder};

/// Implementation of the chat service.
pub struct ChatServiceImpl {
    transport: Arc<dyn HttpTransport>,
    request_builder: RequestBuilder,
}

impl ChatServiceImpl {
    /// Create a new chat service.
    pub fn new(config: Arc<ChatConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            request_builder: RequestBuilder::new(config.base_url.clone()),
            transport,
        }
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn stream_answer(
        &self,
        query: &str,
        on_chunk: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> ChatResult<()> {
        validate_query(query)?;

        let request = self.request_builder.chat_request(query)?;

        tracing::debug!(query_bytes = query.len(), "starting answer stream");

        let chunks = self
            .transport
            .send_streaming(request)
            .await
            .map_err(ChatError::from)?;

        let mut fragments = AnswerStream::new(chunks);
        let mut answer_bytes = 0usize;

        while let Some(fragment) = fragments.next().await {
            let fragment = fragment.map_err(|err| {
                tracing::warn!(error = %err, answer_bytes, "answer stream interrupted");
                err
            })?;
            answer_bytes += fragment.len();
            on_chunk(&fragment);
        }

        tracing::debug!(answer_bytes, "answer stream complete");

        Ok(())
    }
}

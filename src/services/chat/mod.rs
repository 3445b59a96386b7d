//! Chat service: streaming query/answer interaction.

mod service;
mod validation;

pub use service::ChatServiceImpl;
pub use validation::MAX_QUERY_BYTES;

use async_trait::async_trait;

use crate::error::ChatResult;

/// Streaming chat interface.
///
/// Chunk callbacks for a single call fire strictly sequentially, in
/// network-arrival order: the next buffer is only read after the previous
/// callback has returned. A panicking callback aborts the stream; panics
/// are not caught.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Stream the answer to `query`, invoking `on_chunk` exactly once per
    /// non-empty decoded fragment.
    ///
    /// Fails with [`crate::error::RequestError::Failed`] before any
    /// callback if the backend responds with a non-success status, and with
    /// [`crate::error::StreamError::Interrupted`] if the connection drops
    /// mid-stream. An empty response body completes successfully with zero
    /// callbacks. No retries are performed; retry policy, if any, belongs
    /// to the caller.
    async fn stream_answer(
        &self,
        query: &str,
        on_chunk: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> ChatResult<()>;

    /// Collect the full answer to `query` into one string.
    async fn answer(&self, query: &str) -> ChatResult<String> {
        let mut collected = String::new();
        self.stream_answer(query, &mut |fragment: &str| collected.push_str(fragment))
            .await?;
        Ok(collected)
    }
}

//! Streaming support for document-chat answers.
//!
//! The backend streams the answer as raw UTF-8 text with no framing: the
//! transport delivers byte buffers of arbitrary size, and a buffer boundary
//! may fall in the middle of a multi-byte character. This module provides:
//!
//! - [`StreamTextDecoder`] — a stateful incremental UTF-8 decoder that
//!   carries incomplete trailing sequences between buffers, so no boundary
//!   can split or corrupt a character
//! - [`AnswerStream`] — a `Stream` adapter that turns a chunked byte stream
//!   into a sequence of decoded text fragments
//!
//! ## Example
//!
//! ```rust,no_run
//! use docchat_client::streaming::AnswerStream;
//! use docchat_client::transport::ChunkedStream;
//! use futures::StreamExt;
//!
//! async fn collect(chunks: ChunkedStream) -> String {
//!     let mut fragments = AnswerStream::new(chunks);
//!     let mut answer = String::new();
//!     while let Some(Ok(fragment)) = fragments.next().await {
//!         answer.push_str(&fragment);
//!     }
//!     answer
//! }
//! ```

mod answer_stream;
mod decoder;

pub use answer_stream::AnswerStream;
pub use decoder::StreamTextDecoder;

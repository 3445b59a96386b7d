//! Stream adapter turning chunked bytes into decoded text fragments.

use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

use super::decoder::StreamTextDecoder;
use crate::error::{ChatError, StreamError};
use crate::transport::ChunkedStream;

/// Stream of decoded answer fragments.
///
/// Wraps a [`ChunkedStream`] and yields one item per non-empty decoded
/// fragment, in network-arrival order. Empty byte buffers and buffers whose
/// decoded output is empty (e.g. a lone continuation byte) produce no item.
/// At end-of-stream the decoder's final flush is emitted if non-empty, so
/// residual bytes surface as replacement characters instead of vanishing.
///
/// A transport failure ends the stream with
/// [`StreamError::Interrupted`]; its `partial_text_delivered` flag records
/// whether any fragment was yielded before the failure.
pub struct AnswerStream {
    inner: ChunkedStream,
    decoder: StreamTextDecoder,
    delivered: bool,
    finished: bool,
}

impl AnswerStream {
    /// Create a new answer stream over a chunked byte stream.
    pub fn new(inner: ChunkedStream) -> Self {
        Self {
            inner,
            decoder: StreamTextDecoder::new(),
            delivered: false,
            finished: false,
        }
    }

    /// Whether at least one fragment has been yielded so far.
    pub fn delivered_any(&self) -> bool {
        self.delivered
    }
}

impl Stream for AnswerStream {
    type Item = Result<String, ChatError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.finished {
            return Poll::Ready(None);
        }

        loop {
            match this.inner.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(bytes))) => {
                    let fragment = this.decoder.decode(&bytes);
                    if !fragment.is_empty() {
                        this.delivered = true;
                        return Poll::Ready(Some(Ok(fragment)));
                    }
                    // Nothing decodable yet; keep reading.
                }
                Poll::Ready(Some(Err(err))) => {
                    this.finished = true;
                    return Poll::Ready(Some(Err(ChatError::Stream(StreamError::Interrupted {
                        message: err.to_string(),
                        partial_text_delivered: this.delivered,
                    }))));
                }
                Poll::Ready(None) => {
                    this.finished = true;
                    let tail = this.decoder.finish();
                    if tail.is_empty() {
                        return Poll::Ready(None);
                    }
                    this.delivered = true;
                    return Poll::Ready(Some(Ok(tail)));
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportError;
    use bytes::Bytes;
    use futures::{stream, StreamExt};
    use tokio_test::block_on;

    fn chunked(items: Vec<Result<Bytes, TransportError>>) -> ChunkedStream {
        Box::pin(stream::iter(items))
    }

    #[test]
    fn test_yields_fragments_in_order() {
        block_on(async {
            let mut fragments = AnswerStream::new(chunked(vec![
                Ok(Bytes::from_static(b"The doc")),
                Ok(Bytes::from_static(b" ments ")),
                Ok(Bytes::from_static(b"discuss X.")),
            ]));

            let mut out = Vec::new();
            while let Some(fragment) = fragments.next().await {
                out.push(fragment.unwrap());
            }
            assert_eq!(out, vec!["The doc", " ments ", "discuss X."]);
        });
    }

    #[test]
    fn test_empty_stream_yields_nothing() {
        block_on(async {
            let mut fragments = AnswerStream::new(chunked(vec![]));
            assert!(fragments.next().await.is_none());
        });
    }

    #[test]
    fn test_empty_buffers_are_skipped() {
        block_on(async {
            let mut fragments = AnswerStream::new(chunked(vec![
                Ok(Bytes::new()),
                Ok(Bytes::from_static(b"hi")),
                Ok(Bytes::new()),
            ]));

            assert_eq!(fragments.next().await.unwrap().unwrap(), "hi");
            assert!(fragments.next().await.is_none());
        });
    }

    #[test]
    fn test_split_multibyte_char_is_reassembled() {
        block_on(async {
            let bytes = "世".as_bytes();
            let mut fragments = AnswerStream::new(chunked(vec![
                Ok(Bytes::copy_from_slice(&bytes[..1])),
                Ok(Bytes::copy_from_slice(&bytes[1..])),
            ]));

            assert_eq!(fragments.next().await.unwrap().unwrap(), "世");
            assert!(fragments.next().await.is_none());
        });
    }

    #[test]
    fn test_truncated_char_flushes_at_end() {
        block_on(async {
            let bytes = "世".as_bytes();
            let mut fragments = AnswerStream::new(chunked(vec![Ok(Bytes::copy_from_slice(
                &bytes[..2],
            ))]));

            assert_eq!(fragments.next().await.unwrap().unwrap(), "\u{FFFD}");
            assert!(fragments.next().await.is_none());
        });
    }

    #[test]
    fn test_error_before_any_fragment() {
        block_on(async {
            let mut fragments = AnswerStream::new(chunked(vec![Err(TransportError::Request(
                "connection reset".to_string(),
            ))]));

            let err = fragments.next().await.unwrap().unwrap_err();
            match err {
                ChatError::Stream(StreamError::Interrupted {
                    partial_text_delivered,
                    ..
                }) => assert!(!partial_text_delivered),
                other => panic!("unexpected error: {:?}", other),
            }
            assert!(fragments.next().await.is_none());
        });
    }

    #[test]
    fn test_error_after_fragment_sets_partial_flag() {
        block_on(async {
            let mut fragments = AnswerStream::new(chunked(vec![
                Ok(Bytes::from_static(b"partial answer")),
                Err(TransportError::Request("connection reset".to_string())),
            ]));

            assert_eq!(fragments.next().await.unwrap().unwrap(), "partial answer");
            let err = fragments.next().await.unwrap().unwrap_err();
            match err {
                ChatError::Stream(StreamError::Interrupted {
                    partial_text_delivered,
                    ..
                }) => assert!(partial_text_delivered),
                other => panic!("unexpected error: {:?}", other),
            }
        });
    }
}

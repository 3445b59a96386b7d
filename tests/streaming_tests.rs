//! Integration tests for the streaming text decoder and answer stream.

use bytes::Bytes;
use docchat_client::streaming::{AnswerStream, StreamTextDecoder};
use docchat_client::transport::{ChunkedStream, TransportError};
use docchat_client::{ChatError, StreamError};
use futures::{stream, StreamExt};
use pretty_assertions::assert_eq;

fn chunked(items: Vec<Result<Bytes, TransportError>>) -> ChunkedStream {
    Box::pin(stream::iter(items))
}

fn ok_chunks(chunks: Vec<&'static [u8]>) -> ChunkedStream {
    chunked(chunks.into_iter().map(|c| Ok(Bytes::from_static(c))).collect())
}

async fn collect(mut fragments: AnswerStream) -> Vec<String> {
    let mut out = Vec::new();
    while let Some(fragment) = fragments.next().await {
        out.push(fragment.expect("fragment"));
    }
    out
}

#[test]
fn test_decoder_split_invariance_at_every_boundary() {
    // Splitting a valid UTF-8 sequence at any byte boundary and decoding
    // each piece with the stateful decoder yields the same string as
    // decoding the whole sequence at once.
    let text = "Olá! café 世界 🌍 — fin";
    let bytes = text.as_bytes();

    for first in 0..=bytes.len() {
        for second in first..=bytes.len() {
            let mut decoder = StreamTextDecoder::new();
            let mut out = decoder.decode(&bytes[..first]);
            out.push_str(&decoder.decode(&bytes[first..second]));
            out.push_str(&decoder.decode(&bytes[second..]));
            out.push_str(&decoder.finish());
            assert_eq!(out, text, "split at bytes {} and {}", first, second);
        }
    }
}

#[tokio::test]
async fn test_three_byte_char_split_one_then_two() {
    // A 3-byte character split as [1 byte, 2 bytes]: the first read decodes
    // to nothing, the character arrives intact exactly once.
    let bytes = "世".as_bytes();
    let mut decoder = StreamTextDecoder::new();

    let first = decoder.decode(&bytes[..1]);
    let second = decoder.decode(&bytes[1..]);

    assert_eq!(first, "");
    assert_eq!(second, "世");
    assert_eq!(decoder.finish(), "");
}

#[tokio::test]
async fn test_answer_stream_scenario_fragments() {
    let fragments = collect(AnswerStream::new(chunked(
        docchat_client::fixtures::answer_fragments()
            .into_iter()
            .map(Ok)
            .collect(),
    )))
    .await;

    assert_eq!(fragments.concat(), docchat_client::fixtures::FULL_ANSWER);
}

#[tokio::test]
async fn test_answer_stream_empty_body() {
    let fragments = collect(AnswerStream::new(ok_chunks(vec![]))).await;
    assert!(fragments.is_empty());
}

#[tokio::test]
async fn test_answer_stream_tolerates_empty_buffers() {
    let fragments = collect(AnswerStream::new(ok_chunks(vec![b"", b"one", b"", b" two"]))).await;
    assert_eq!(fragments, vec!["one", " two"]);
}

#[tokio::test]
async fn test_answer_stream_reassembles_split_characters() {
    let fragments = collect(AnswerStream::new(chunked(
        docchat_client::fixtures::split_utf8_fragments()
            .into_iter()
            .map(Ok)
            .collect(),
    )))
    .await;

    assert_eq!(
        fragments.concat(),
        docchat_client::fixtures::SPLIT_UTF8_ANSWER
    );
    // No fragment ever holds a broken character
    for fragment in &fragments {
        assert!(!fragment.contains('\u{FFFD}'));
    }
}

#[tokio::test]
async fn test_answer_stream_flushes_truncated_tail() {
    // Stream ends in the middle of a multi-byte character: the residue is
    // flushed as a replacement character, not dropped.
    let bytes = "世".as_bytes();
    let fragments = collect(AnswerStream::new(chunked(vec![Ok(Bytes::copy_from_slice(
        &bytes[..2],
    ))])))
    .await;

    assert_eq!(fragments, vec!["\u{FFFD}"]);
}

#[tokio::test]
async fn test_answer_stream_interruption_before_text() {
    let mut fragments = AnswerStream::new(chunked(vec![Err(TransportError::Request(
        "connection reset by peer".to_string(),
    ))]));

    let err = fragments.next().await.expect("item").expect_err("error");
    match err {
        ChatError::Stream(StreamError::Interrupted {
            partial_text_delivered,
            ..
        }) => assert!(!partial_text_delivered),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(fragments.next().await.is_none());
}

#[tokio::test]
async fn test_answer_stream_interruption_after_text() {
    let mut fragments = AnswerStream::new(chunked(vec![
        Ok(Bytes::from_static(b"partial")),
        Err(TransportError::Timeout),
    ]));

    assert_eq!(fragments.next().await.expect("item").expect("text"), "partial");

    let err = fragments.next().await.expect("item").expect_err("error");
    match err {
        ChatError::Stream(StreamError::Interrupted {
            partial_text_delivered,
            ..
        }) => assert!(partial_text_delivered),
        other => panic!("unexpected error: {:?}", other),
    }
}

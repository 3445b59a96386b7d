//! Test fixtures for the document-chat client.
//!
//! Canned response bodies and chunk sequences shared by unit and
//! integration tests.

use bytes::Bytes;

/// The fragments of a short streamed answer, split mid-word.
pub fn answer_fragments() -> Vec<Bytes> {
    vec![
        Bytes::from_static(b"The doc"),
        Bytes::from_static(b" ments "),
        Bytes::from_static(b"discuss X."),
    ]
}

/// The answer produced by [`answer_fragments`] once accumulated.
pub const FULL_ANSWER: &str = "The doc ments discuss X.";

/// A multi-byte answer split so that chunk boundaries fall inside
/// characters: "caf" + first byte of "é", then the rest.
pub fn split_utf8_fragments() -> Vec<Bytes> {
    let text = "café 世界".as_bytes();
    // "caf" plus the first byte of the two-byte "é"
    vec![
        Bytes::copy_from_slice(&text[..4]),
        Bytes::copy_from_slice(&text[4..6]),
        Bytes::copy_from_slice(&text[6..]),
    ]
}

/// The answer produced by [`split_utf8_fragments`] once accumulated.
pub const SPLIT_UTF8_ANSWER: &str = "café 世界";

/// A successful upload response body.
pub const UPLOAD_SUCCESS_JSON: &str = r#"{"chunks": 7}"#;

/// An upload rejection body.
pub const UPLOAD_ERROR_JSON: &str = r#"{"detail": "Only PDF files are supported"}"#;

/// A healthy backend response body.
pub const HEALTH_JSON: &str = r#"{"status": "running", "model": "qwen2:0.5b"}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_fragments_concatenate() {
        let mut answer = String::new();
        for fragment in answer_fragments() {
            answer.push_str(std::str::from_utf8(&fragment).unwrap());
        }
        assert_eq!(answer, FULL_ANSWER);
    }

    #[test]
    fn test_split_utf8_fragments_cover_the_text() {
        let total: usize = split_utf8_fragments().iter().map(Bytes::len).sum();
        assert_eq!(total, SPLIT_UTF8_ANSWER.len());
        // The second boundary falls inside "é"
        assert!(std::str::from_utf8(&split_utf8_fragments()[0]).is_err());
    }
}

//! Stateful incremental UTF-8 decoding.

/// Incremental UTF-8 decoder for byte buffers split at arbitrary boundaries.
///
/// Trailing bytes that do not complete a character are buffered and
/// prefixed onto the next buffer before decoding, so a chunk boundary can
/// never split or corrupt a multi-byte character. Invalid interior
/// sequences become U+FFFD immediately; [`finish`](Self::finish) flushes
/// any residual bytes as replacement characters rather than dropping them.
///
/// Property: for any valid UTF-8 byte sequence, decoding an arbitrary
/// split of it chunk by chunk and concatenating the outputs yields exactly
/// the same string as decoding the whole sequence at once.
#[derive(Debug, Default)]
pub struct StreamTextDecoder {
    /// Unconsumed trailing bytes of an incomplete sequence (at most 3).
    pending: Vec<u8>,
}

impl StreamTextDecoder {
    /// Create a new decoder with no carried state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next buffer, carrying incomplete sequences over.
    ///
    /// Returns the decoded text, which may be empty — e.g. for an empty
    /// buffer, or one holding only the continuation bytes of a character
    /// still in flight.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        if self.pending.is_empty() {
            return self.decode_bytes(chunk);
        }

        let mut carried = std::mem::take(&mut self.pending);
        carried.extend_from_slice(chunk);
        self.decode_bytes(&carried)
    }

    fn decode_bytes(&mut self, mut input: &[u8]) -> String {
        let mut out = String::with_capacity(input.len());

        loop {
            match std::str::from_utf8(input) {
                Ok(valid) => {
                    out.push_str(valid);
                    break;
                }
                Err(err) => {
                    let valid_up_to = err.valid_up_to();
                    if let Ok(valid) = std::str::from_utf8(&input[..valid_up_to]) {
                        out.push_str(valid);
                    }

                    match err.error_len() {
                        // Invalid sequence inside the buffer: replace and resume.
                        Some(bad) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            input = &input[valid_up_to + bad..];
                        }
                        // Incomplete trailing sequence: hold it for the next buffer.
                        None => {
                            self.pending = input[valid_up_to..].to_vec();
                            break;
                        }
                    }
                }
            }
        }

        out
    }

    /// Flush any residual bytes at end-of-stream.
    ///
    /// A truncated final character decodes to replacement characters
    /// instead of being silently dropped.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            return String::new();
        }

        let tail = std::mem::take(&mut self.pending);
        String::from_utf8_lossy(&tail).into_owned()
    }

    /// Whether an incomplete sequence is currently carried.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        let mut decoder = StreamTextDecoder::new();
        assert_eq!(decoder.decode(b"hello"), "hello");
        assert!(!decoder.has_pending());
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn test_empty_buffer_is_noop() {
        let mut decoder = StreamTextDecoder::new();
        assert_eq!(decoder.decode(b""), "");
        assert!(!decoder.has_pending());
    }

    #[test]
    fn test_three_byte_char_split_one_two() {
        // "世" is E4 B8 96; split as [1 byte, 2 bytes]
        let bytes = "世".as_bytes();
        let mut decoder = StreamTextDecoder::new();

        assert_eq!(decoder.decode(&bytes[..1]), "");
        assert!(decoder.has_pending());
        assert_eq!(decoder.decode(&bytes[1..]), "世");
        assert!(!decoder.has_pending());
    }

    #[test]
    fn test_four_byte_char_split_every_byte() {
        // "🌍" is four bytes; feed one byte at a time
        let bytes = "🌍".as_bytes();
        let mut decoder = StreamTextDecoder::new();

        let mut out = String::new();
        for &b in bytes {
            out.push_str(&decoder.decode(&[b]));
        }
        assert_eq!(out, "🌍");
    }

    #[test]
    fn test_split_invariance_at_every_boundary() {
        let text = "café 世界 🌍 mixed text";
        let bytes = text.as_bytes();

        for split in 0..=bytes.len() {
            let mut decoder = StreamTextDecoder::new();
            let mut out = decoder.decode(&bytes[..split]);
            out.push_str(&decoder.decode(&bytes[split..]));
            out.push_str(&decoder.finish());
            assert_eq!(out, text, "split at byte {}", split);
        }
    }

    #[test]
    fn test_lone_continuation_byte_is_replaced() {
        // 0x80 is a continuation byte with no lead byte
        let mut decoder = StreamTextDecoder::new();
        assert_eq!(decoder.decode(&[0x80]), "\u{FFFD}");
    }

    #[test]
    fn test_invalid_sequence_between_valid_text() {
        let mut decoder = StreamTextDecoder::new();
        let out = decoder.decode(&[b'a', 0xFF, b'b']);
        assert_eq!(out, "a\u{FFFD}b");
    }

    #[test]
    fn test_finish_flushes_truncated_char() {
        // First two bytes of "世", never completed
        let bytes = "世".as_bytes();
        let mut decoder = StreamTextDecoder::new();

        assert_eq!(decoder.decode(&bytes[..2]), "");
        assert!(decoder.has_pending());
        assert_eq!(decoder.finish(), "\u{FFFD}");
        assert!(!decoder.has_pending());
    }

    #[test]
    fn test_pending_survives_empty_buffer() {
        let bytes = "é".as_bytes();
        let mut decoder = StreamTextDecoder::new();

        assert_eq!(decoder.decode(&bytes[..1]), "");
        assert_eq!(decoder.decode(b""), "");
        assert_eq!(decoder.decode(&bytes[1..]), "é");
    }
}

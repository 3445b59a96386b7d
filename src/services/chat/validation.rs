//! Request validation for the chat service.

use crate::error::{ChatResult, RequestError};

/// Maximum accepted query length in bytes.
pub const MAX_QUERY_BYTES: usize = 8 * 1024;

/// Validate a query before sending it to the backend.
pub fn validate_query(query: &str) -> ChatResult<()> {
    if query.trim().is_empty() {
        return Err(RequestError::EmptyQuery.into());
    }

    if query.len() > MAX_QUERY_BYTES {
        return Err(RequestError::QueryTooLong {
            length: query.len(),
            max: MAX_QUERY_BYTES,
        }
        .into());
    }

    Ok(())
}

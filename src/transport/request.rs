//! HTTP request builder for the document-chat backend.
//!
//! This module provides the `RequestBuilder` for constructing HTTP requests
//! with proper URL formatting and query-parameter encoding.

use bytes::Bytes;
use std::collections::HashMap;
use url::Url;

use super::endpoints;
use super::http::{HttpMethod, HttpRequest};
use crate::error::ChatError;

/// Builder for constructing HTTP requests to the document-chat backend.
///
/// The `RequestBuilder` handles:
/// - URL construction relative to the configured base URL
/// - Query-parameter URL encoding (via [`Url::query_pairs_mut`])
/// - Header management (Content-Type, multipart boundaries)
#[derive(Clone, Debug)]
pub struct RequestBuilder {
    /// Base URL for the backend.
    base_url: Url,
}

impl RequestBuilder {
    /// Creates a new request builder.
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Builds a complete URL for the given path, appending query pairs.
    ///
    /// Each query value is URL-encoded, so the caller passes raw text.
    pub fn build_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ChatError> {
        let mut url = if path == endpoints::HEALTH {
            self.base_url.clone()
        } else {
            self.base_url.join(path.trim_start_matches('/'))?
        };

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for &(key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Builds the streaming chat request.
    ///
    /// `POST /chat?query=<url-encoded text>` with a JSON content type and no
    /// body, matching what the backend expects.
    pub fn chat_request(&self, query: &str) -> Result<HttpRequest, ChatError> {
        let url = self.build_url(endpoints::CHAT, &[("query", query)])?;

        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: url.to_string(),
            headers,
            body: None,
        })
    }

    /// Builds a plain GET request for the given path.
    pub fn get_request(&self, path: &str) -> Result<HttpRequest, ChatError> {
        let url = self.build_url(path, &[])?;

        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: HashMap::new(),
            body: None,
        })
    }

    /// Builds a multipart/form-data POST request with a pre-assembled body.
    pub fn multipart_request(
        &self,
        path: &str,
        boundary: &str,
        body: Bytes,
    ) -> Result<HttpRequest, ChatError> {
        let url = self.build_url(path, &[])?;

        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            format!("multipart/form-data; boundary={}", boundary),
        );

        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: url.to_string(),
            headers,
            body: Some(body),
        })
    }
}

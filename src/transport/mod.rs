//! HTTP transport layer for the document-chat client.

pub mod endpoints;
mod error;
mod http;
mod request;
mod reqwest;

pub use self::reqwest::ReqwestTransport;
pub use error::TransportError;
pub use http::{ChunkedStream, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use request::RequestBuilder;

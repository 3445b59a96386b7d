//! Observability support for the document-chat client.
//!
//! Services emit structured events through the `tracing` crate; this module
//! provides the logging configuration used to initialize a subscriber at
//! application startup.

mod logging;

pub use logging::{LogFormat, LogLevel, LoggingConfig};

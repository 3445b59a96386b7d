//! Service implementations for the document-chat backend.

pub mod chat;
pub mod health;
pub mod upload;

pub use chat::{ChatService, ChatServiceImpl};
pub use health::{HealthService, HealthServiceImpl};
pub use upload::{UploadService, UploadServiceImpl};

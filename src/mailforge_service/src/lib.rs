pub mod email_service;
pub mod security_headers;
pub mod tracing;

pub use email_service::EmailService;

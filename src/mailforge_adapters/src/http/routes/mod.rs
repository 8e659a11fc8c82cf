pub mod account;
pub mod common;
pub mod docs;
pub mod email;
pub mod error;
pub mod messages;

pub use account::{delete_account, get_account, get_me};
pub use common::{DataResponse, TokenQuery};
pub use docs::{openapi_document, swagger_json};
pub use email::{CreateEmailResponse, create_email};
pub use error::{ApiError, ErrorBody, ErrorDetails, ErrorResponse, expose_error_details};
pub use messages::{ListMessagesQuery, delete_message, list_messages, read_message};

/// Liveness banner served at `/`.
pub async fn banner() -> &'static str {
    "mailforge: Mail.tm + Disify proxy is running"
}

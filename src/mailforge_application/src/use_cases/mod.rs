pub mod acquire_verified_email;
pub mod create_email;
pub mod delete_account;
pub mod delete_message;
pub mod get_account;
pub mod get_me;
pub mod list_messages;
pub mod read_message;

// Re-export for convenience
pub use acquire_verified_email::{
    AcquireEmailError, AcquireVerifiedEmailUseCase, Acquisition, DEFAULT_MAX_ATTEMPTS,
};
pub use create_email::{CreateEmailError, CreateEmailUseCase, CreatedEmail};
pub use delete_account::DeleteAccountUseCase;
pub use delete_message::DeleteMessageUseCase;
pub use get_account::GetAccountUseCase;
pub use get_me::GetMeUseCase;
pub use list_messages::{ListMessagesError, ListMessagesUseCase};
pub use read_message::ReadMessageUseCase;

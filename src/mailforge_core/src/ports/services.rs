use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{
    access_token::AccessToken,
    account::{Account, AuthToken},
    mail_domain::Domain,
    message::{Message, MessageList},
    profile::UserProfile,
    validity::ValidityReport,
};

// MailProvider port trait and errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MailProviderError {
    #[error("Unauthorized, the token may have expired")]
    Unauthorized,
    #[error("Resource not found")]
    NotFound,
    #[error("Mail provider responded with status {0}")]
    UnexpectedStatus(u16),
    #[error("Failed to reach the mail provider: {0}")]
    Transport(String),
    #[error("Unexpected response from the mail provider: {0}")]
    InvalidResponse(String),
}

/// Disposable mailbox provider.
///
/// Implementations map one call to one HTTP request and never retry;
/// retrying is the caller's decision.
#[async_trait]
pub trait MailProvider: Send + Sync {
    async fn list_domains(&self) -> Result<Vec<Domain>, MailProviderError>;
    async fn create_account(
        &self,
        username: &str,
        domain: &str,
        password: &Secret<String>,
    ) -> Result<Account, MailProviderError>;
    async fn issue_token(
        &self,
        address: &str,
        password: &Secret<String>,
    ) -> Result<AuthToken, MailProviderError>;

    async fn get_account(&self, token: &AccessToken) -> Result<Account, MailProviderError>;
    async fn get_me(&self, token: &AccessToken) -> Result<Account, MailProviderError>;
    async fn delete_account(&self, token: &AccessToken) -> Result<(), MailProviderError>;

    async fn list_messages(
        &self,
        token: &AccessToken,
        page: u32,
    ) -> Result<MessageList, MailProviderError>;
    async fn get_message(
        &self,
        token: &AccessToken,
        message_id: &str,
    ) -> Result<Message, MailProviderError>;
    async fn mark_read(
        &self,
        token: &AccessToken,
        message_id: &str,
    ) -> Result<(), MailProviderError>;
    async fn delete_message(
        &self,
        token: &AccessToken,
        message_id: &str,
    ) -> Result<(), MailProviderError>;
}

// EmailValidator port trait and errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailValidatorError {
    #[error("Email validator responded with status {0}")]
    UnexpectedStatus(u16),
    #[error("Failed to reach the email validator: {0}")]
    Transport(String),
    #[error("Unexpected response from the email validator: {0}")]
    InvalidResponse(String),
}

/// Third-party check of whether an address looks real and deliverable.
#[async_trait]
pub trait EmailValidator: Send + Sync {
    async fn check(&self, email: &str) -> Result<ValidityReport, EmailValidatorError>;
}

/// Source of synthetic personas used to decorate new mailboxes.
pub trait ProfileGenerator: Send + Sync {
    fn generate(&self) -> UserProfile;
}

pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    access_token::{AccessToken, AccessTokenError},
    account::{Account, AuthToken},
    credentials::{CredentialPolicy, Credentials},
    hydra::HydraCollection,
    mail_domain::Domain,
    message::{Attachment, Correspondent, Message, MessageList},
    profile::{PostalAddress, UserProfile},
    validity::ValidityReport,
    verified_email::VerifiedEmail,
};

pub use ports::services::{
    EmailValidator, EmailValidatorError, MailProvider, MailProviderError, ProfileGenerator,
};

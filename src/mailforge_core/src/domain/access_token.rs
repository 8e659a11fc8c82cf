use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

/// Bearer token issued by the mail provider for one mailbox.
///
/// The value is opaque: it is never parsed or validated locally, only
/// forwarded in the `Authorization` header. Wrapped in [`Secret`] so it does
/// not leak through `Debug` output or logs.
#[derive(Debug, Clone)]
pub struct AccessToken(Secret<String>);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessTokenError {
    #[error("Authentication token is required")]
    Missing,
}

impl TryFrom<Secret<String>> for AccessToken {
    type Error = AccessTokenError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().trim().is_empty() {
            return Err(AccessTokenError::Missing);
        }
        Ok(Self(value))
    }
}

impl TryFrom<String> for AccessToken {
    type Error = AccessTokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(Secret::new(value))
    }
}

impl AsRef<Secret<String>> for AccessToken {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

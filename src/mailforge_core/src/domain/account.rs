use chrono::{DateTime, Utc};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use super::access_token::AccessToken;

/// Mailbox registered with the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub address: String,
    #[serde(default)]
    pub quota: u64,
    #[serde(default)]
    pub used: u64,
    #[serde(default)]
    pub is_disabled: bool,
    #[serde(default)]
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response of the provider's token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthToken {
    pub id: String,
    pub token: Secret<String>,
}

impl AuthToken {
    pub fn access_token(&self) -> Option<AccessToken> {
        AccessToken::try_from(self.token.clone()).ok()
    }
}

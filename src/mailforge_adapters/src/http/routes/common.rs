use mailforge_core::AccessToken;
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// `{ "success": true, "data": ... }`
#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `?token=` query parameter carrying the mailbox bearer token.
#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

impl TokenQuery {
    pub fn access_token(self) -> Result<AccessToken, ApiError> {
        Ok(AccessToken::try_from(self.token.unwrap_or_default())?)
    }
}

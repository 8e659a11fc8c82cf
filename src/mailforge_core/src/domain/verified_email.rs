use serde::{Deserialize, Serialize};

/// A mailbox handed back to the caller, with the credentials needed to use
/// it and whether the validity checker accepted the address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedEmail {
    pub email: String,
    pub password: String,
    pub token: String,
    pub is_verified: bool,
}

use serde::{Deserialize, Serialize};

/// Synthetic persona returned alongside a new mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub gender: String,
    pub age: i32,
    /// `YYYY-MM-DD`
    pub birthdate: String,
    pub avatar: String,
    pub address: PostalAddress,
    pub phone: String,
    pub occupation: String,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A mail domain offered by the provider for new accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: String,
    pub domain: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

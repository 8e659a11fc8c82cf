use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::hydra::HydraCollection;

pub type MessageList = HydraCollection<Message>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correspondent {
    pub address: String,
    #[serde(default)]
    pub name: String,
}

/// A message received by a disposable mailbox.
///
/// List responses omit the bodies, so `text` and `html` are only populated
/// when a single message is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub account_id: String,
    pub msgid: String,
    pub from: Correspondent,
    #[serde(default)]
    pub to: Vec<Correspondent>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub html: Vec<String>,
    #[serde(default)]
    pub seen: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub has_attachments: bool,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub download_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub filename: String,
    pub content_type: String,
    #[serde(default)]
    pub disposition: String,
    #[serde(default)]
    pub transfer_encoding: String,
    #[serde(default)]
    pub related: bool,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub download_url: String,
}

use serde::{Deserialize, Serialize};

/// JSON-LD collection envelope used by the mail provider for paged lists.
///
/// Kept as-is when forwarded to API callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydraCollection<T> {
    #[serde(rename = "hydra:member")]
    pub members: Vec<T>,
    #[serde(rename = "hydra:totalItems", default)]
    pub total_items: u64,
}

impl<T> HydraCollection<T> {
    pub fn into_members(self) -> Vec<T> {
        self.members
    }
}

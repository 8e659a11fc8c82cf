use serde::{Deserialize, Serialize};

/// Raw verdict fields returned by the email validity checker.
///
/// Fields the checker omits (it does so for malformed addresses) default to
/// `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidityReport {
    pub email: String,
    pub domain: String,
    pub format: bool,
    pub dns: bool,
    pub deliverable: bool,
    pub spam: bool,
    pub disposable: bool,
    pub whitelisted: bool,
}

impl ValidityReport {
    /// An address passes when it is well formed, resolvable, deliverable and
    /// not flagged as spam. `disposable` and `whitelisted` are informational.
    pub fn is_valid(&self) -> bool {
        self.format && self.dns && self.deliverable && !self.spam
    }
}

//! The hostgroup record.

use serde::{Deserialize, Serialize};

/// A named block of hosts-file text that can be toggled on and off.
///
/// Field names are serialized in PascalCase (`Name`, `Body`, `IsActive`),
/// matching the store files written by earlier releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostsGroup {
    pub name: String,
    pub body: String,
    #[serde(default)]
    pub is_active: bool,
}

impl HostsGroup {
    /// A new, inactive group.
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            is_active: false,
        }
    }

    pub fn active(mut self) -> Self {
        self.is_active = true;
        self
    }

    /// `"active"` or `"inactive"`.
    pub fn status(&self) -> &'static str {
        if self.is_active { "active" } else { "inactive" }
    }
}

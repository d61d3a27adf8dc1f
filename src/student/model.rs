//! Student record shape
//!
//! Wire names follow the front end that consumes this API: `_id`,
//! `studentname`, `studentaddress`, `mobile`. Unknown fields are rejected at
//! deserialization time.

use serde::{Deserialize, Serialize};

/// A single student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Student {
    /// Record identifier; `None` until the store assigns one
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    /// Student name (required)
    #[serde(rename = "studentname")]
    pub name: String,

    /// Postal address
    #[serde(rename = "studentaddress", default)]
    pub address: Option<String>,

    /// Mobile number, stored as given
    #[serde(default)]
    pub mobile: Option<String>,
}

impl Student {
    /// Create a record with only a name set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            address: None,
            mobile: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = Some(mobile.into());
        self
    }

    /// Identifier, treating an empty string as unassigned
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Overwrite the identifier
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }
}

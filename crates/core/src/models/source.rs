use serde::{Deserialize, Serialize};

use super::wire::FromWire;

/// A news outlet the backend ingests from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: u64,
    /// Unique short key, e.g. "bbg".
    pub codename: String,
    pub name: String,
    pub website: String,
}

impl FromWire for Source {
    const ENTITY: &'static str = "source";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSource {
    pub codename: String,
    pub name: String,
    pub website: String,
}

impl NewSource {
    pub fn new(
        codename: impl Into<String>,
        name: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        Self {
            codename: codename.into(),
            name: name.into(),
            website: website.into(),
        }
    }
}

/// Partial update. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

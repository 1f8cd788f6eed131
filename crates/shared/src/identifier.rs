//! Identifier - case-insensitive content key

use serde::{Deserialize, Serialize};
use std::fmt;

/// Case-insensitive key used for jobs, items, skills, factions and NPC templates.
///
/// Stored lower-cased so derived `Eq`/`Hash`/`Ord` are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// The empty identifier ("no item", "no job")
    pub const EMPTY: Identifier = Identifier(String::new());

    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `None` for the empty identifier
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Identifier {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        <Self as PartialEq<str>>::eq(self, other)
    }
}

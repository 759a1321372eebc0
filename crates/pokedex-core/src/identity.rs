//! Identity types for categories

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a category (historically a "type"), e.g. `"Fire"`.
///
/// Equality is exact and case-sensitive; no normalization is ever applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(pub String);

impl CategoryName {
    /// Create a new category name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reduce a category slot from the upstream document to a single name.
    ///
    /// The document stores each slot as a list. A slot holds at most one
    /// name; the names are never joined into a combined key.
    pub fn from_slot(owner: &str, names: Vec<String>) -> Result<Option<Self>> {
        let mut names = names.into_iter();
        let first = names.next();
        if names.next().is_some() {
            return Err(Error::TooManyCategories {
                owner: owner.to_string(),
            });
        }
        Ok(first.map(Self))
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CategoryName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for CategoryName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CategoryName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

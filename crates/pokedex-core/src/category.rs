//! Category records and their damage relationships

use crate::CategoryName;
use serde::{Deserialize, Serialize};

/// A creature/move classification with directed damage relationships.
///
/// Names listed in `effective_against` and `weak_against` are expected to
/// exist as categories elsewhere in the dataset, but dangling references are
/// tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique name of this category
    pub name: CategoryName,
    /// Categories this one deals double damage to
    #[serde(default)]
    pub effective_against: Vec<CategoryName>,
    /// Categories this one takes half damage from
    #[serde(default)]
    pub weak_against: Vec<CategoryName>,
}

impl Category {
    /// Create a category with no relationships
    pub fn new(name: impl Into<CategoryName>) -> Self {
        Self {
            name: name.into(),
            effective_against: Vec::new(),
            weak_against: Vec::new(),
        }
    }

    /// Builder-style helper to set the effective-against list
    pub fn effective_against<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CategoryName>,
    {
        self.effective_against = names.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style helper to set the weak-against list
    pub fn weak_against<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CategoryName>,
    {
        self.weak_against = names.into_iter().map(Into::into).collect();
        self
    }

    /// All category names this record refers to
    pub fn references(&self) -> impl Iterator<Item = &CategoryName> {
        self.effective_against.iter().chain(self.weak_against.iter())
    }
}

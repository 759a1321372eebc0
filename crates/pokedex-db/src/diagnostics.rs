//! Referential diagnostics. Dangling category references are tolerated and
//! only reported.

use crate::store::Store;
use pokedex_core::CategoryName;
use std::fmt;

/// The record that holds a dangling reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSource {
    Category(String),
    Creature(String),
    Move(String),
}

impl fmt::Display for ReferenceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceSource::Category(name) => write!(f, "category:{}", name),
            ReferenceSource::Creature(name) => write!(f, "creature:{}", name),
            ReferenceSource::Move(name) => write!(f, "move:{}", name),
        }
    }
}

/// A category name that is referenced but has no category record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub name: CategoryName,
    pub source: ReferenceSource,
}

impl Store {
    /// Find every category reference without a matching category record.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut found = Vec::new();
        let mut check = |name: &CategoryName, source: &dyn Fn() -> ReferenceSource| {
            if self.category(name.as_str()).is_none() {
                found.push(DanglingReference {
                    name: name.clone(),
                    source: source(),
                });
            }
        };

        for category in &self.categories {
            for name in category.references() {
                check(name, &|| ReferenceSource::Category(category.name.to_string()));
            }
        }
        for creature in &self.creatures {
            for name in creature.references() {
                check(name, &|| ReferenceSource::Creature(creature.name.clone()));
            }
        }
        for mv in &self.moves {
            check(&mv.category, &|| ReferenceSource::Move(mv.name.clone()));
        }

        found
    }
}

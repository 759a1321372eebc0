//! Creature records

use crate::CategoryName;
use serde::{Deserialize, Serialize};

/// Candy resource associated with a creature's evolution family
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candy {
    pub name: String,
    pub family_id: i64,
}

/// What it takes to evolve a creature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionRequirement {
    /// Candy amount needed
    pub amount: i64,
    /// Candy family identifier
    pub family: i64,
    /// Candy name
    pub name: String,
}

/// Display-only reference to another creature in the same evolution chain.
///
/// Never resolved to a live record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionRef {
    pub number: String,
    pub name: String,
}

/// A creature record (an "entity" in query terms).
///
/// `name` is the lookup key for detail queries. `number` is a stable display
/// identifier and is not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub number: String,
    pub name: String,
    pub classification: String,
    /// Primary category, always present
    pub primary_category: CategoryName,
    /// Secondary category, absent for single-category creatures
    pub secondary_category: Option<CategoryName>,
    pub weaknesses: Vec<CategoryName>,
    /// Names of fast moves
    pub fast_attacks: Vec<String>,
    /// Names of special moves
    pub special_attacks: Vec<String>,
    /// Display string, never parsed
    pub weight: String,
    /// Display string, never parsed
    pub height: String,
    pub base_attack: i64,
    pub base_defense: i64,
    pub base_stamina: i64,
    pub capture_rate: f64,
    pub flee_rate: f64,
    pub buddy_distance_needed: i64,
    pub candy: Candy,
    pub evolution_requirement: Option<EvolutionRequirement>,
    pub next_evolutions: Vec<EvolutionRef>,
    pub previous_evolutions: Vec<EvolutionRef>,
}

impl Creature {
    /// Create a creature with the given identity and zeroed stats
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        primary_category: impl Into<CategoryName>,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            classification: String::new(),
            primary_category: primary_category.into(),
            secondary_category: None,
            weaknesses: Vec::new(),
            fast_attacks: Vec::new(),
            special_attacks: Vec::new(),
            weight: String::new(),
            height: String::new(),
            base_attack: 0,
            base_defense: 0,
            base_stamina: 0,
            capture_rate: 0.0,
            flee_rate: 0.0,
            buddy_distance_needed: 0,
            candy: Candy::default(),
            evolution_requirement: None,
            next_evolutions: Vec::new(),
            previous_evolutions: Vec::new(),
        }
    }

    /// Builder-style helper to set the secondary category
    pub fn with_secondary(mut self, category: impl Into<CategoryName>) -> Self {
        self.secondary_category = Some(category.into());
        self
    }

    /// Builder-style helper to set the base attack stat
    pub fn with_base_attack(mut self, base_attack: i64) -> Self {
        self.base_attack = base_attack;
        self
    }

    /// The creature's categories: primary first, then secondary if present
    pub fn categories(&self) -> impl Iterator<Item = &CategoryName> {
        std::iter::once(&self.primary_category).chain(self.secondary_category.iter())
    }

    /// Check whether either category equals `name` exactly
    pub fn has_category(&self, name: &str) -> bool {
        self.categories().any(|c| c == name)
    }

    /// Check whether this creature and `other` have any category in common.
    ///
    /// Compares each of `other`'s categories against each of ours; an absent
    /// secondary category never matches.
    pub fn shares_category_with(&self, other: &Creature) -> bool {
        other.categories().any(|c| self.has_category(c.as_str()))
    }

    /// All category names this record refers to
    pub fn references(&self) -> impl Iterator<Item = &CategoryName> {
        self.categories().chain(self.weaknesses.iter())
    }
}

//! Attack move records

use crate::{CategoryName, Creature};
use serde::{Deserialize, Serialize};

/// An attack record associated with exactly one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub id: i64,
    pub name: String,
    pub category: CategoryName,
    /// Damage dealt to the target
    pub damage: i64,
    /// Energy required
    pub energy: i64,
    /// Damage per second
    pub dps: f64,
    pub duration: i64,
}

impl Move {
    /// Create a move with zeroed stats
    pub fn new(id: i64, name: impl Into<String>, category: impl Into<CategoryName>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            damage: 0,
            energy: 0,
            dps: 0.0,
            duration: 0,
        }
    }

    /// Check whether this move's category is one of the creature's categories
    pub fn applies_to(&self, creature: &Creature) -> bool {
        creature.has_category(self.category.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applies_to() {
        let ember = Move::new(101, "Ember", "Fire");
        let gust = Move::new(102, "Gust", "Flying");
        let bubble = Move::new(103, "Bubble", "Water");
        let charizard = Creature::new("006", "Charizard", "Fire").with_secondary("Flying");

        assert!(ember.applies_to(&charizard));
        assert!(gust.applies_to(&charizard));
        assert!(!bubble.applies_to(&charizard));
    }

    #[test]
    fn test_empty_category_move() {
        let odd = Move::new(200, "Struggle", "");
        let charmander = Creature::new("004", "Charmander", "Fire");
        assert!(!odd.applies_to(&charmander));
    }
}

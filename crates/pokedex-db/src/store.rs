//! In-memory store wrapper.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use pokedex_core::{Category, Creature, Dataset, Move};

/// Read-only store over one loaded dataset.
///
/// Collections keep their storage order. Name lookups resolve to the first
/// record with that name; later duplicates stay in the collections but are
/// never returned by a lookup.
#[derive(Debug)]
pub struct Store {
    pub(crate) categories: Vec<Category>,
    pub(crate) creatures: Vec<Creature>,
    pub(crate) moves: Vec<Move>,
    /// Creature name -> index of its first occurrence
    creature_index: IndexMap<String, usize>,
    /// Category name -> index of its first occurrence
    category_index: IndexMap<String, usize>,
    loaded_at: DateTime<Utc>,
}

/// Collection sizes of a store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub categories: usize,
    pub creatures: usize,
    pub moves: usize,
}

impl Store {
    /// Build a store from a loaded dataset.
    pub fn new(dataset: Dataset) -> Self {
        let Dataset {
            categories,
            creatures,
            moves,
        } = dataset;

        let mut creature_index = IndexMap::with_capacity(creatures.len());
        for (i, creature) in creatures.iter().enumerate() {
            if creature_index.contains_key(&creature.name) {
                tracing::warn!(name = %creature.name, "Duplicate creature name; first record wins");
                continue;
            }
            creature_index.insert(creature.name.clone(), i);
        }

        let mut category_index = IndexMap::with_capacity(categories.len());
        for (i, category) in categories.iter().enumerate() {
            if category_index.contains_key(category.name.as_str()) {
                tracing::warn!(name = %category.name, "Duplicate category name; first record wins");
                continue;
            }
            category_index.insert(category.name.as_str().to_string(), i);
        }

        let store = Self {
            categories,
            creatures,
            moves,
            creature_index,
            category_index,
            loaded_at: Utc::now(),
        };

        for dangling in store.dangling_references() {
            tracing::warn!(
                category = %dangling.name,
                source = %dangling.source,
                "Reference to unknown category"
            );
        }

        store
    }

    /// Create an empty store.
    pub fn empty() -> Self {
        Self::new(Dataset::new())
    }

    /// All categories in storage order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All creatures in storage order.
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// All moves in storage order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Look up the first creature with this exact name.
    pub fn creature(&self, name: &str) -> Option<&Creature> {
        self.creature_index.get(name).map(|&i| &self.creatures[i])
    }

    /// Look up the first category with this exact name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.category_index.get(name).map(|&i| &self.categories[i])
    }

    /// When this store was built.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Collection sizes.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            categories: self.categories.len(),
            creatures: self.creatures.len(),
            moves: self.moves.len(),
        }
    }
}

impl From<Dataset> for Store {
    fn from(dataset: Dataset) -> Self {
        Self::new(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset {
            categories: vec![Category::new("Fire"), Category::new("Water")],
            creatures: vec![
                Creature::new("004", "Charmander", "Fire").with_base_attack(116),
                Creature::new("007", "Squirtle", "Water"),
                Creature::new("999", "Charmander", "Water").with_base_attack(1),
            ],
            moves: vec![Move::new(1, "Ember", "Fire")],
        }
    }

    #[test]
    fn test_store_lookup() {
        let store = Store::new(dataset());

        assert_eq!(store.creature("Squirtle").map(|c| c.number.as_str()), Some("007"));
        assert!(store.creature("squirtle").is_none());
        assert!(store.category("Fire").is_some());
        assert!(store.category("Grass").is_none());
    }

    #[test]
    fn test_duplicate_name_first_wins() {
        let store = Store::new(dataset());

        let charmander = store.creature("Charmander").unwrap();
        assert_eq!(charmander.number, "004");
        assert_eq!(charmander.base_attack, 116);
        // The duplicate is still part of the collection
        assert_eq!(store.creatures().len(), 3);
    }

    #[test]
    fn test_stats() {
        let store = Store::new(dataset());
        assert_eq!(
            store.stats(),
            StoreStats {
                categories: 2,
                creatures: 3,
                moves: 1,
            }
        );

        let empty = Store::empty();
        assert_eq!(empty.stats(), StoreStats::default());
    }
}

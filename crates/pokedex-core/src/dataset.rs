//! The three collections that make up a loaded dataset

use crate::{Category, Creature, Move};
use serde::{Deserialize, Serialize};

/// All categories, creatures and moves, each in storage order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub categories: Vec<Category>,
    pub creatures: Vec<Creature>,
    pub moves: Vec<Move>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all three collections are empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.creatures.is_empty() && self.moves.is_empty()
    }
}

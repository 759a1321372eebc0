//! Schema definitions for dataset documents

pub mod category;
pub mod creature;
pub mod moves;

pub use category::CategoryDef;
pub use creature::CreatureDef;
pub use moves::MoveDef;

use pokedex_core::Dataset;
use serde::{Deserialize, Serialize};

/// A whole dataset document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentDef {
    #[serde(default, alias = "categories")]
    pub types: Vec<CategoryDef>,
    #[serde(default, alias = "creatures")]
    pub pokemons: Vec<CreatureDef>,
    #[serde(default)]
    pub moves: Vec<MoveDef>,
}

impl DocumentDef {
    /// Convert the document into core records, keeping storage order
    pub fn into_dataset(self) -> pokedex_core::Result<Dataset> {
        let creatures = self
            .pokemons
            .into_iter()
            .map(CreatureDef::into_creature)
            .collect::<pokedex_core::Result<Vec<_>>>()?;

        Ok(Dataset {
            categories: self.types.into_iter().map(Into::into).collect(),
            creatures,
            moves: self.moves.into_iter().map(Into::into).collect(),
        })
    }
}

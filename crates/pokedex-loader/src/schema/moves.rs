//! Move definition schema

use pokedex_core::{CategoryName, Move};
use serde::{Deserialize, Serialize};

/// A move as stored in the document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveDef {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", alias = "category")]
    pub category: String,
    #[serde(default)]
    pub damage: i64,
    #[serde(default)]
    pub energy: i64,
    #[serde(default)]
    pub dps: f64,
    #[serde(default)]
    pub duration: i64,
}

impl From<MoveDef> for Move {
    fn from(def: MoveDef) -> Self {
        Move {
            id: def.id,
            name: def.name,
            category: CategoryName(def.category),
            damage: def.damage,
            energy: def.energy,
            dps: def.dps,
            duration: def.duration,
        }
    }
}

//! Pokedex Loader - reads the dataset document into memory
//!
//! The document holds three top-level sequences:
//! - `types`: categories and their damage relationships
//! - `pokemons`: creatures
//! - `moves`: attack moves
//!
//! JSON documents use the upstream key names (`"Type I"`, `"BaseAttack"`, ...).
//! RON documents use the snake_case field names of the core model.

mod error;
mod loader;
mod schema;

pub use error::{Error, Result};
pub use loader::{load_dataset, DocumentFormat, Loader};
pub use schema::{CategoryDef, CreatureDef, DocumentDef, MoveDef};

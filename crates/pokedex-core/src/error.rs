//! Error types for pokedex-core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Creature {owner} lists more than one name in a single category slot")]
    TooManyCategories { owner: String },

    #[error("Creature {0} has no primary category")]
    MissingPrimaryCategory(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

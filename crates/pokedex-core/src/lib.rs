//! Pokedex Core - data model for the pokedex query service
//!
//! This crate provides the immutable records the rest of the workspace works on:
//! - `Category` with its directed damage relationships
//! - `Creature` tagged with a primary and an optional secondary category
//! - `Move` tagged with exactly one category
//! - `Dataset`, the three collections in storage order
//!
//! ## Category matching
//!
//! Every join in the service compares category names by exact, case-sensitive
//! string equality. A creature's two categories are separate fields and are
//! always compared one at a time.

mod category;
mod creature;
mod dataset;
mod error;
mod identity;
mod moves;

pub use category::Category;
pub use creature::{Candy, Creature, EvolutionRef, EvolutionRequirement};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use identity::CategoryName;
pub use moves::Move;

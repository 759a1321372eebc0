//! Pokedex DB - in-memory store and query engine
//!
//! Provides read-only access to:
//! - Category, creature and move repositories in storage order
//! - Filter, sort and join queries across the three collections
//! - View selection for the HTTP surface (`Query` -> `QueryResult`)

mod diagnostics;
mod queries;
mod store;
mod view;

pub use diagnostics::{DanglingReference, ReferenceSource};
pub use queries::{CategoryListing, CreatureDetail, SortMode, MAX_EXAMPLE_PEERS};
pub use store::{Store, StoreStats};
pub use view::{Query, QueryResult};

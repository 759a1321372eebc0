//! Read-only HTTP query service over the pokedex dataset.
//!
//! Three views are served, each selected by path:
//!
//! - `/categories?name=<category>`: category index or one category's matchups
//! - `/entities?type=<category>&sortby=BaseAttack`: category navigation or a
//!   filtered creature listing
//! - `/entity?name=<creature>`: creature index or one creature's detail
//!
//! Any other path returns the static navigation page.

pub mod config;
pub mod pages;
pub mod query;
pub mod router;
pub mod server;
pub mod state;

pub use config::{Config, ConfigError, LoadPolicy};
pub use router::{Route, Router};
pub use server::{handle_request, serve};
pub use state::{AppState, LoadError};

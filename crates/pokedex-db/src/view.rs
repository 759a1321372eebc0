//! View selection: maps a requested view onto the query engine.
//!
//! An absent or empty parameter selects the matching "list all" view
//! instead of a filtered or detailed one.

use crate::queries::{CategoryListing, CreatureDetail, SortMode};
use crate::store::Store;
use pokedex_core::{Category, Creature};

/// A requested view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'q> {
    /// Category index, or detail for one category
    Categories { name: Option<&'q str> },
    /// Category navigation, or creatures filtered by category
    Creatures {
        category: Option<&'q str>,
        sort: SortMode,
    },
    /// Creature index, or detail for one creature
    Creature { name: Option<&'q str> },
}

/// The result of a view, ready for rendering
#[derive(Debug, Clone)]
pub enum QueryResult<'a> {
    /// Every category, linking to category details
    CategoryIndex(&'a [Category]),
    /// Every category, linking to filtered creature listings
    CategoryNavigation(&'a [Category]),
    /// Detail of the requested category, `None` when it does not exist
    CategoryDetail(Option<&'a Category>),
    /// Creatures having the requested category
    CategoryListing(CategoryListing<'a>),
    /// Every creature
    CreatureIndex(&'a [Creature]),
    /// Detail of the requested creature, `None` when it does not exist
    CreatureDetail(Option<CreatureDetail<'a>>),
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl Store {
    /// Compute the result of a view.
    pub fn execute(&self, query: Query<'_>) -> QueryResult<'_> {
        match query {
            Query::Categories { name } => match non_empty(name) {
                Some(name) => QueryResult::CategoryDetail(self.category_detail(name)),
                None => QueryResult::CategoryIndex(self.categories()),
            },
            Query::Creatures { category, sort } => match non_empty(category) {
                Some(category) => {
                    QueryResult::CategoryListing(self.creatures_by_category(category, sort))
                }
                None => QueryResult::CategoryNavigation(self.categories()),
            },
            Query::Creature { name } => match non_empty(name) {
                Some(name) => QueryResult::CreatureDetail(self.creature_detail(name)),
                None => QueryResult::CreatureIndex(self.creatures()),
            },
        }
    }
}

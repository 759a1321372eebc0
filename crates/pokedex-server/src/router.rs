//! Request router with exact path matching

/// A routed endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Static navigation page (fallback)
    Index,
    /// Category index or category detail
    Categories,
    /// Category navigation or creatures filtered by category
    Creatures,
    /// Creature index or creature detail
    Creature,
    /// Dataset reload
    Reload,
}

/// Path table, including the legacy paths kept as aliases
const ROUTES: &[(&str, Route)] = &[
    ("/categories", Route::Categories),
    ("/list/types", Route::Categories),
    ("/entities", Route::Creatures),
    ("/list", Route::Creatures),
    ("/entity", Route::Creature),
    ("/get", Route::Creature),
];

/// Router for matching request paths to endpoints
#[derive(Debug, Clone)]
pub struct Router {
    enable_reload: bool,
}

impl Router {
    /// Create a new router
    pub fn new(enable_reload: bool) -> Self {
        Self { enable_reload }
    }

    /// Match a request path to a route. Unknown paths fall back to the index.
    pub fn route(&self, path: &str) -> Route {
        if self.enable_reload && path == "/reload" {
            return Route::Reload;
        }
        ROUTES
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, route)| *route)
            .unwrap_or(Route::Index)
    }
}

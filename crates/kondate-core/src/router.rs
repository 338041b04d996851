//! Router: a route table bound to a history strategy
//!
//! Resolution is read-only, so one [`Router`] can be shared by every part
//! of the application once [`crate::init`] has built it.
//!
//! ## Example
//! ```
//! use kondate_core::{HistoryMode, Resolution, Router};
//!
//! let router = Router::builder(HistoryMode::Web)
//!     .route("/", "home", "Home")
//!     .route("/today", "todays-menu", "TodaysMenu")
//!     .build()
//!     .unwrap();
//!
//! let m = router.resolve("/today").into_match().unwrap();
//! assert_eq!(m.component, "TodaysMenu");
//! assert!(matches!(router.resolve("/input"), Resolution::NotFound { .. }));
//! ```

use crate::history::{normalize_base, HistoryMode};
use crate::route::RouteDefinition;
use crate::table::RouteTable;
use crate::{Error, Result};
use std::borrow::Cow;

/// A successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<C> {
    /// Route name
    pub name: String,
    /// Concrete path (`/recipes/7`)
    pub path: String,
    /// Declared pattern (`/recipes/:id`)
    pub pattern: String,
    /// Component to mount
    pub component: C,
    /// Captured parameters as (name, value) pairs
    pub params: Vec<(String, String)>,
}

impl<C> RouteMatch<C> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Outcome of navigating to a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<C> {
    Matched(RouteMatch<C>),
    /// No declared route matches; `path` is what was looked up
    NotFound { path: String },
}

impl<C> Resolution<C> {
    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }

    pub fn into_match(self) -> Option<RouteMatch<C>> {
        match self {
            Resolution::Matched(m) => Some(m),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn as_match(&self) -> Option<&RouteMatch<C>> {
        match self {
            Resolution::Matched(m) => Some(m),
            Resolution::NotFound { .. } => None,
        }
    }

    /// Name of the matched route, if any
    pub fn name(&self) -> Option<&str> {
        self.as_match().map(|m| m.name.as_str())
    }
}

/// Route table bound to a history mode and base path
#[derive(Debug)]
pub struct Router<C> {
    table: RouteTable<C>,
    mode: HistoryMode,
    base: String,
}

impl<C: Clone> Router<C> {
    /// Bind an already validated table to a history mode
    pub fn new(table: RouteTable<C>, mode: HistoryMode) -> Self {
        Self::with_base(table, mode, "")
    }

    /// Like [`Router::new`], serving the app below `base` (`/app`)
    pub fn with_base(table: RouteTable<C>, mode: HistoryMode, base: &str) -> Self {
        let base = normalize_base(base);
        tracing::info!(
            routes = table.len(),
            mode = %mode,
            base = %base,
            "router constructed"
        );
        for route in &table {
            tracing::debug!(name = %route.name, path = %route.path, "route registered");
        }
        Self { table, mode, base }
    }

    pub fn builder(mode: HistoryMode) -> RouterBuilder<C> {
        RouterBuilder::new(mode)
    }

    /// Navigate by path
    ///
    /// `location` may be a bare route path (`/today`) or a full browser
    /// location in this router's mode (`/app/#/today?x=1`). In hash mode a
    /// location without `#` is a bare path unless it is the base itself;
    /// in web mode anything not below the base is a bare path.
    pub fn resolve(&self, location: &str) -> Resolution<C> {
        let Some(path) = self.mode.route_path(&self.base, location) else {
            tracing::debug!(location, base = %self.base, "fragment location outside base");
            return Resolution::NotFound {
                path: location.to_string(),
            };
        };
        self.resolve_path(&path)
    }

    /// Navigate by a bare route path, ignoring mode and base
    ///
    /// Captured parameters are percent-decoded; `path` keeps the encoded form.
    pub fn resolve_path(&self, path: &str) -> Resolution<C> {
        let (path, _, _) = kondate_router::split_location(path);
        match self.table.find(path) {
            Some((route, m)) => {
                tracing::debug!(name = %route.name, path, "route resolved");
                let params = m
                    .params
                    .into_iter()
                    .map(|(k, v)| {
                        // not valid UTF-8 once decoded: keep it as written
                        let decoded = urlencoding::decode(&v).map(Cow::into_owned).ok();
                        (k, decoded.unwrap_or(v))
                    })
                    .collect();
                Resolution::Matched(RouteMatch {
                    name: route.name.clone(),
                    path: kondate_router::normalize(path),
                    pattern: route.path.clone(),
                    component: route.component.clone(),
                    params,
                })
            }
            None => {
                tracing::debug!(path, "no route matched");
                Resolution::NotFound {
                    path: kondate_router::normalize(path),
                }
            }
        }
    }

    /// Navigate by name
    ///
    /// The result is identical to resolving the filled-in path.
    pub fn resolve_name(&self, name: &str, params: &[(&str, &str)]) -> Result<RouteMatch<C>> {
        let path = self.path_for(name, params)?;
        match self.resolve_path(&path) {
            Resolution::Matched(m) if m.name == name => Ok(m),
            // a more specific route shadows this pattern for these params
            _ => Err(Error::UnknownRoute(name.to_string())),
        }
    }

    /// Concrete route path for a named route
    ///
    /// Values are percent-encoded. A wildcard value keeps its `/`
    /// separators; every other character that is not URL-safe is escaped.
    /// Empty values count as missing.
    pub fn path_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let route = self
            .table
            .get(name)
            .ok_or_else(|| Error::UnknownRoute(name.to_string()))?;
        let wildcard = kondate_router::wildcard_name(&route.path);

        let encoded: Vec<(&str, Cow<'_, str>)> = params
            .iter()
            .map(|&(k, v)| {
                let value = if Some(k) == wildcard {
                    Cow::Owned(
                        v.split('/')
                            .map(urlencoding::encode)
                            .collect::<Vec<_>>()
                            .join("/"),
                    )
                } else {
                    urlencoding::encode(v)
                };
                (k, value)
            })
            .collect();
        let pairs: Vec<(&str, &str)> = encoded.iter().map(|(k, v)| (*k, v.as_ref())).collect();

        kondate_router::fill(&route.path, &pairs).map_err(|e| Error::MissingParam {
            route: name.to_string(),
            param: e.0,
        })
    }

    /// Browser-facing URL for a named route in this router's mode
    pub fn href(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let path = self.path_for(name, params)?;
        Ok(self.href_for_path(&path))
    }

    /// Browser-facing URL for a bare route path
    pub fn href_for_path(&self, path: &str) -> String {
        self.mode.href(&self.base, &kondate_router::normalize(path))
    }

    /// First route that shows `component`
    pub fn route_for(&self, component: &C) -> Option<&RouteDefinition<C>>
    where
        C: PartialEq,
    {
        self.table.find_component(component)
    }

    pub fn get(&self, name: &str) -> Option<&RouteDefinition<C>> {
        self.table.get(name)
    }

    pub fn table(&self) -> &RouteTable<C> {
        &self.table
    }

    pub fn routes(&self) -> &[RouteDefinition<C>] {
        self.table.routes()
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// Normalised base path, `""` when served from the root
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Route table builder
///
/// ```
/// use kondate_core::{HistoryMode, Router};
///
/// let router = Router::builder(HistoryMode::Hash)
///     .base("/app")
///     .route("/", "home", 0)
///     .route("/list", "ingredient-list", 1)
///     .build()
///     .unwrap();
/// assert_eq!(router.href("ingredient-list", &[]).unwrap(), "/app/#/list");
/// ```
#[derive(Debug)]
pub struct RouterBuilder<C> {
    mode: HistoryMode,
    base: String,
    routes: Vec<RouteDefinition<C>>,
}

impl<C: Clone> RouterBuilder<C> {
    pub fn new(mode: HistoryMode) -> Self {
        Self {
            mode,
            base: String::new(),
            routes: Vec::new(),
        }
    }

    /// Serve the app below this path
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Append one route
    pub fn route(mut self, path: impl Into<String>, name: impl Into<String>, component: C) -> Self {
        self.routes.push(RouteDefinition::new(path, name, component));
        self
    }

    /// Append routes in order
    pub fn routes<I, R>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RouteDefinition<C>>,
    {
        self.routes.extend(routes.into_iter().map(Into::into));
        self
    }

    /// Validate the table and construct the router
    pub fn build(self) -> Result<Router<C>> {
        let table = RouteTable::new(self.routes)?;
        Ok(Router::with_base(table, self.mode, &self.base))
    }
}

//! Route definitions

/// One entry of a route table: a path pattern, a unique name, and the
/// component shown at that path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition<C> {
    /// URL pattern (`/today`, `/recipes/:id`)
    pub path: String,
    /// Unique name used for programmatic navigation
    pub name: String,
    /// Component reference; the table does not manage its lifecycle
    pub component: C,
}

impl<C> RouteDefinition<C> {
    pub fn new(path: impl Into<String>, name: impl Into<String>, component: C) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component,
        }
    }
}

impl<C, P, N> From<(P, N, C)> for RouteDefinition<C>
where
    P: Into<String>,
    N: Into<String>,
{
    fn from((path, name, component): (P, N, C)) -> Self {
        Self::new(path, name, component)
    }
}

//! Validated, immutable route tables

use crate::route::RouteDefinition;
use crate::{Error, Result};
use kondate_router::{InsertError, Match, PathTrie};
use std::collections::HashMap;

/// Ordered sequence of route definitions
///
/// Names are unique and non-empty; paths are unique after normalisation.
/// Both are checked once in [`RouteTable::new`] and the table cannot be
/// modified afterwards.
#[derive(Debug)]
pub struct RouteTable<C> {
    routes: Vec<RouteDefinition<C>>,
    by_name: HashMap<String, usize>,
    trie: PathTrie,
}

impl<C> RouteTable<C> {
    /// Validate and index a list of routes, declaration order preserved
    pub fn new<I, R>(routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<RouteDefinition<C>>,
    {
        let routes: Vec<RouteDefinition<C>> = routes.into_iter().map(Into::into).collect();
        if routes.is_empty() {
            tracing::warn!("rejecting empty route table");
            return Err(Error::EmptyTable);
        }

        let mut by_name = HashMap::with_capacity(routes.len());
        let mut trie = PathTrie::new();

        for (idx, route) in routes.iter().enumerate() {
            if let Err(err) = Self::index(&routes, route, idx, &mut by_name, &mut trie) {
                tracing::warn!(name = %route.name, path = %route.path, error = %err, "invalid route");
                return Err(err);
            }
        }

        Ok(Self {
            routes,
            by_name,
            trie,
        })
    }

    fn index(
        routes: &[RouteDefinition<C>],
        route: &RouteDefinition<C>,
        idx: usize,
        by_name: &mut HashMap<String, usize>,
        trie: &mut PathTrie,
    ) -> Result<()> {
        if route.name.is_empty() {
            return Err(Error::EmptyName {
                path: route.path.clone(),
            });
        }
        if !route.path.starts_with('/') {
            return Err(Error::InvalidPath {
                path: route.path.clone(),
                reason: "must start with '/'".to_string(),
            });
        }
        if by_name.contains_key(&route.name) {
            return Err(Error::DuplicateName(route.name.clone()));
        }

        let id = u32::try_from(idx).map_err(|_| Error::InvalidPath {
            path: route.path.clone(),
            reason: "too many routes".to_string(),
        })?;
        trie.insert(&route.path, id).map_err(|e| match e {
            InsertError::Conflict { existing } => Error::DuplicatePath {
                path: route.path.clone(),
                existing: routes[existing as usize].name.clone(),
            },
            InsertError::WildcardNotLast => Error::InvalidPath {
                path: route.path.clone(),
                reason: e.to_string(),
            },
        })?;

        by_name.insert(route.name.clone(), idx);
        Ok(())
    }

    /// Route with the given name
    pub fn get(&self, name: &str) -> Option<&RouteDefinition<C>> {
        self.by_name.get(name).map(|&idx| &self.routes[idx])
    }

    /// Route matching a bare path, with its captured parameters
    pub fn find(&self, path: &str) -> Option<(&RouteDefinition<C>, Match)> {
        let m = self.trie.find(path)?;
        Some((&self.routes[m.id as usize], m))
    }

    /// First route whose component equals `component`
    pub fn find_component(&self, component: &C) -> Option<&RouteDefinition<C>>
    where
        C: PartialEq,
    {
        self.routes.iter().find(|r| &r.component == component)
    }

    pub fn routes(&self) -> &[RouteDefinition<C>] {
        &self.routes
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a, C> IntoIterator for &'a RouteTable<C> {
    type Item = &'a RouteDefinition<C>;
    type IntoIter = std::slice::Iter<'a, RouteDefinition<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

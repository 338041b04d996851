//! Programmatic navigation against a [`History`]

use crate::history::History;
use crate::router::{Resolution, Router};
use crate::Result;

/// Drives a host history through a shared [`Router`]
///
/// Every URL written to the history is produced by the router, so hash
/// mode pushes `#/...` URLs and the base path is always applied.
#[derive(Debug)]
pub struct Navigator<'r, C, H> {
    router: &'r Router<C>,
    history: H,
}

impl<'r, C: Clone, H: History> Navigator<'r, C, H> {
    pub fn new(router: &'r Router<C>, history: H) -> Self {
        Self { router, history }
    }

    /// Route for the history's current location
    pub fn current(&self) -> Resolution<C> {
        self.router.resolve(&self.history.location())
    }

    /// Push a bare route path (`/today`); returns what it resolves to
    ///
    /// Undeclared paths are still pushed and resolve to `NotFound`.
    pub fn push(&mut self, path: &str) -> Resolution<C> {
        let url = self.url_for(path);
        tracing::debug!(%url, "push");
        self.history.push(&url);
        self.current()
    }

    /// Push a named route
    pub fn push_named(&mut self, name: &str, params: &[(&str, &str)]) -> Result<Resolution<C>> {
        let url = self.router.href(name, params)?;
        tracing::debug!(name, %url, "push named");
        self.history.push(&url);
        Ok(self.current())
    }

    /// Replace the current entry with a bare route path
    pub fn replace(&mut self, path: &str) -> Resolution<C> {
        let url = self.url_for(path);
        tracing::debug!(%url, "replace");
        self.history.replace(&url);
        self.current()
    }

    /// Go back one entry; `None` if there is nothing to go back to
    pub fn back(&mut self) -> Option<Resolution<C>> {
        self.history.back().then(|| self.current())
    }

    /// Go forward one entry; `None` if there is nothing to go forward to
    pub fn forward(&mut self) -> Option<Resolution<C>> {
        self.history.forward().then(|| self.current())
    }

    fn url_for(&self, path: &str) -> String {
        let (path, query, _) = kondate_router::split_location(path);
        let href = self.router.href_for_path(path);
        match query {
            Some(q) => format!("{}?{}", href, q),
            None => href,
        }
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn into_history(self) -> H {
        self.history
    }
}

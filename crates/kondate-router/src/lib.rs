//! kondate-router: Zero-dependency segment trie for client-side routes
//!
//! Path matcher shared by kondate-core (route tables) and kondate-wasm
//! (browser bindings).
//!
//! ## Features
//! - O(k) path lookup where k = number of segments
//! - Static paths: `/list`, `/today`
//! - Parameters: `/recipes/:id`, `/calendar/:year/:month`
//! - Wildcards: `/docs/*rest`, `/*` (must be the last segment)
//! - Zero external dependencies
//!
//! ## Priority
//! 1. Exact static match (highest)
//! 2. Parameter match
//! 3. Wildcard match (lowest)
//!
//! ## Example
//! ```
//! use kondate_router::PathTrie;
//!
//! let mut trie = PathTrie::new();
//! trie.insert("/", 0).unwrap();
//! trie.insert("/recipes/:id", 1).unwrap();
//! trie.insert("/*rest", 2).unwrap();
//!
//! let m = trie.find("/recipes/7").unwrap();
//! assert_eq!(m.id, 1);
//! assert_eq!(m.params, vec![("id".to_string(), "7".to_string())]);
//! ```

use std::collections::HashMap;
use std::fmt;

/// Route match result
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Id the matching pattern was inserted with
    pub id: u32,
    /// Captured path parameters as (name, value) pairs
    pub params: Vec<(String, String)>,
}

impl Match {
    /// Look up a single captured parameter
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Error returned by [`PathTrie::insert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertError {
    /// A pattern with the same shape is already registered
    Conflict { existing: u32 },
    /// `*` appeared before the last segment
    WildcardNotLast,
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::Conflict { existing } => {
                write!(f, "pattern conflicts with route #{}", existing)
            }
            InsertError::WildcardNotLast => write!(f, "wildcard must be the last segment"),
        }
    }
}

impl std::error::Error for InsertError {}

/// A `:param` or `*wildcard` with no value supplied to [`fill`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingParam(pub String);

impl fmt::Display for MissingParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing value for parameter `{}`", self.0)
    }
}

impl std::error::Error for MissingParam {}

/// Terminal data: the id plus the parameter names along the path
#[derive(Debug)]
struct Terminal {
    id: u32,
    names: Vec<String>,
}

/// Trie node for path segment matching
///
/// Parameter names live on the terminal rather than on the node, so
/// `/a/:x/b` and `/a/:y/c` can share the same param child.
#[derive(Debug, Default)]
struct Node {
    /// Static children (key = path segment)
    children: HashMap<String, Node>,
    /// Parameter child (:id)
    param_child: Option<Box<Node>>,
    /// Wildcard terminal (*rest)
    wildcard: Option<Terminal>,
    /// Set if a pattern ends at this node
    terminal: Option<Terminal>,
}

/// Zero-dependency segment trie
#[derive(Debug, Default)]
pub struct PathTrie {
    root: Node,
    len: usize,
}

impl PathTrie {
    /// Create an empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pattern
    ///
    /// # Arguments
    /// * `pattern` - URL path with optional params (:id) and a trailing wildcard (*)
    /// * `id` - Identifier returned by [`find`](Self::find) on a match
    ///
    /// Two patterns that differ only in parameter names have the same
    /// shape and conflict.
    pub fn insert(&mut self, pattern: &str, id: u32) -> Result<(), InsertError> {
        let segs = segments(pattern);
        if let Some(pos) = segs.iter().position(|s| s.starts_with('*')) {
            if pos + 1 != segs.len() {
                return Err(InsertError::WildcardNotLast);
            }
        }
        Self::insert_node(&mut self.root, &segs, Vec::new(), id)?;
        self.len += 1;
        Ok(())
    }

    fn insert_node(
        node: &mut Node,
        segments: &[&str],
        mut names: Vec<String>,
        id: u32,
    ) -> Result<(), InsertError> {
        let Some((&segment, rest)) = segments.split_first() else {
            if let Some(existing) = &node.terminal {
                return Err(InsertError::Conflict { existing: existing.id });
            }
            node.terminal = Some(Terminal { id, names });
            return Ok(());
        };

        if let Some(name) = segment.strip_prefix(':') {
            names.push(name.to_string());
            let child = node.param_child.get_or_insert_with(Default::default);
            Self::insert_node(child, rest, names, id)
        } else if let Some(name) = segment.strip_prefix('*') {
            if let Some(existing) = &node.wildcard {
                return Err(InsertError::Conflict { existing: existing.id });
            }
            names.push(if name.is_empty() { "*" } else { name }.to_string());
            node.wildcard = Some(Terminal { id, names });
            Ok(())
        } else {
            let child = node.children.entry(segment.to_string()).or_default();
            Self::insert_node(child, rest, names, id)
        }
    }

    /// Find the pattern matching a concrete path
    ///
    /// Query strings and fragments are not stripped here; pass a bare path.
    pub fn find(&self, path: &str) -> Option<Match> {
        let segs = segments(path);
        let mut values = Vec::new();
        Self::find_node(&self.root, &segs, &mut values)
    }

    fn find_node(node: &Node, segments: &[&str], values: &mut Vec<String>) -> Option<Match> {
        let Some((&segment, rest)) = segments.split_first() else {
            return node.terminal.as_ref().map(|t| bind(t, values));
        };

        // Priority 1: exact static match
        if let Some(child) = node.children.get(segment) {
            if let Some(m) = Self::find_node(child, rest, values) {
                return Some(m);
            }
        }

        // Priority 2: parameter match
        if let Some(ref child) = node.param_child {
            values.push(segment.to_string());
            if let Some(m) = Self::find_node(child, rest, values) {
                return Some(m);
            }
            values.pop();
        }

        // Priority 3: wildcard captures everything that is left
        if let Some(ref wildcard) = node.wildcard {
            values.push(segments.join("/"));
            let m = bind(wildcard, values);
            values.pop();
            return Some(m);
        }

        None
    }

    /// Number of inserted patterns
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn bind(terminal: &Terminal, values: &[String]) -> Match {
    Match {
        id: terminal.id,
        params: terminal
            .names
            .iter()
            .cloned()
            .zip(values.iter().cloned())
            .collect(),
    }
}

/// Non-empty segments of a path
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Canonical form of a path: leading slash, no trailing or doubled slashes
///
/// ```
/// assert_eq!(kondate_router::normalize("//list/"), "/list");
/// assert_eq!(kondate_router::normalize(""), "/");
/// ```
pub fn normalize(path: &str) -> String {
    format!("/{}", segments(path).join("/"))
}

/// Split a location into `(path, query, fragment)`
///
/// ```
/// use kondate_router::split_location;
///
/// assert_eq!(split_location("/today?d=1#top"), ("/today", Some("d=1"), Some("top")));
/// assert_eq!(split_location("/list"), ("/list", None, None));
/// ```
pub fn split_location(location: &str) -> (&str, Option<&str>, Option<&str>) {
    let (rest, fragment) = match location.split_once('#') {
        Some((r, f)) => (r, Some(f)),
        None => (location, None),
    };
    match rest.split_once('?') {
        Some((p, q)) => (p, Some(q), fragment),
        None => (rest, None, fragment),
    }
}

/// Name of the trailing `*wildcard` segment of a pattern, if any
///
/// A bare `*` is named `"*"`.
pub fn wildcard_name(pattern: &str) -> Option<&str> {
    segments(pattern)
        .last()?
        .strip_prefix('*')
        .map(|name| if name.is_empty() { "*" } else { name })
}

/// Build a concrete path from a pattern
///
/// Values are inserted verbatim; escaping is up to the caller. An empty
/// value counts as missing.
///
/// ```
/// use kondate_router::fill;
///
/// assert_eq!(fill("/recipes/:id", &[("id", "7")]).unwrap(), "/recipes/7");
/// assert!(fill("/recipes/:id", &[]).is_err());
/// ```
pub fn fill(pattern: &str, params: &[(&str, &str)]) -> Result<String, MissingParam> {
    let lookup = |name: &str| {
        params
            .iter()
            .find(|(k, v)| *k == name && !v.is_empty())
            .map(|(_, v)| *v)
            .ok_or_else(|| MissingParam(name.to_string()))
    };

    let mut out = Vec::new();
    for segment in segments(pattern) {
        if let Some(name) = segment.strip_prefix(':') {
            out.push(lookup(name)?);
        } else if let Some(name) = segment.strip_prefix('*') {
            out.push(lookup(if name.is_empty() { "*" } else { name })?);
        } else {
            out.push(segment);
        }
    }
    Ok(normalize(&out.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        let mut trie = PathTrie::new();
        trie.insert("/", 0).unwrap();
        trie.insert("/list", 1).unwrap();
        trie.insert("/today", 2).unwrap();
        trie.insert("/calendar", 3).unwrap();

        assert_eq!(trie.find("/").unwrap().id, 0);
        assert_eq!(trie.find("/list").unwrap().id, 1);
        assert_eq!(trie.find("/today").unwrap().id, 2);
        assert_eq!(trie.find("/calendar").unwrap().id, 3);
        assert!(trie.find("/input").is_none());
        assert!(trie.find("/list/extra").is_none());
        assert_eq!(trie.len(), 4);
    }

    #[test]
    fn test_param_routes() {
        let mut trie = PathTrie::new();
        trie.insert("/recipes/:id", 1).unwrap();
        trie.insert("/calendar/:year/:month", 2).unwrap();

        let m = trie.find("/recipes/42").unwrap();
        assert_eq!(m.id, 1);
        assert_eq!(m.params, vec![("id".to_string(), "42".to_string())]);

        let m = trie.find("/calendar/2024/05").unwrap();
        assert_eq!(m.id, 2);
        assert_eq!(m.param("year"), Some("2024"));
        assert_eq!(m.param("month"), Some("05"));
    }

    #[test]
    fn test_shared_param_node_keeps_own_names() {
        let mut trie = PathTrie::new();
        trie.insert("/menu/:day/edit", 1).unwrap();
        trie.insert("/menu/:slot/view", 2).unwrap();

        assert_eq!(trie.find("/menu/mon/edit").unwrap().param("day"), Some("mon"));
        assert_eq!(trie.find("/menu/lunch/view").unwrap().param("slot"), Some("lunch"));
    }

    #[test]
    fn test_named_wildcard() {
        let mut trie = PathTrie::new();
        trie.insert("/docs/*rest", 1).unwrap();

        let m = trie.find("/docs/a/b.md").unwrap();
        assert_eq!(m.id, 1);
        assert_eq!(m.params, vec![("rest".to_string(), "a/b.md".to_string())]);
        assert!(trie.find("/docs").is_none());
    }

    #[test]
    fn test_bare_wildcard() {
        let mut trie = PathTrie::new();
        trie.insert("/*", 9).unwrap();

        let m = trie.find("/anything/here").unwrap();
        assert_eq!(m.params, vec![("*".to_string(), "anything/here".to_string())]);
    }

    #[test]
    fn test_priority_static_over_param_over_wildcard() {
        let mut trie = PathTrie::new();
        trie.insert("/recipes/:id", 1).unwrap();
        trie.insert("/recipes/new", 2).unwrap();
        trie.insert("/recipes/*rest", 3).unwrap();

        assert_eq!(trie.find("/recipes/new").unwrap().id, 2);
        assert_eq!(trie.find("/recipes/12").unwrap().id, 1);
        assert_eq!(trie.find("/recipes/12/steps").unwrap().id, 3);
    }

    #[test]
    fn test_backtracks_from_static_branch() {
        let mut trie = PathTrie::new();
        trie.insert("/list/sorted", 1).unwrap();
        trie.insert("/:section/all", 2).unwrap();

        assert_eq!(trie.find("/list/all").unwrap().id, 2);
    }

    #[test]
    fn test_conflicts() {
        let mut trie = PathTrie::new();
        trie.insert("/list", 0).unwrap();
        assert_eq!(
            trie.insert("/list/", 1),
            Err(InsertError::Conflict { existing: 0 })
        );

        trie.insert("/recipes/:id", 2).unwrap();
        assert_eq!(
            trie.insert("/recipes/:slug", 3),
            Err(InsertError::Conflict { existing: 2 })
        );
        assert_eq!(trie.insert("/a/*x/b", 4), Err(InsertError::WildcardNotLast));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_trailing_slash() {
        let mut trie = PathTrie::new();
        trie.insert("/today/", 1).unwrap();

        assert_eq!(trie.find("/today").unwrap().id, 1);
        assert_eq!(trie.find("/today/").unwrap().id, 1);
    }

    #[test]
    fn test_path_helpers() {
        assert_eq!(normalize("/list//"), "/list");
        assert_eq!(wildcard_name("/docs/*rest"), Some("rest"));
        assert_eq!(wildcard_name("/*"), Some("*"));
        assert_eq!(wildcard_name("/recipes/:id"), None);
        assert_eq!(wildcard_name("/"), None);
        assert_eq!(split_location("/#/today"), ("/", None, Some("/today")));
        assert_eq!(fill("/", &[]).unwrap(), "/");
        assert_eq!(
            fill("/calendar/:year", &[]),
            Err(MissingParam("year".to_string()))
        );
        assert_eq!(
            fill("/recipes/:id", &[("id", "")]),
            Err(MissingParam("id".to_string()))
        );
    }
}

//! History strategies
//!
//! [`HistoryMode`] decides how a route path is written into a URL.
//! [`History`] is the host's session history; browsers implement it in
//! kondate-wasm, everything else can use [`MemoryHistory`].

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How route paths appear in the address bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// History API: `/app/today`
    #[default]
    Web,
    /// URL fragment: `/app/#/today`
    Hash,
}

impl HistoryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryMode::Web => "web",
            HistoryMode::Hash => "hash",
        }
    }

    /// Browser-facing URL for a route path under `base`
    ///
    /// `base` must already be normalised (`""` for none, else `/app`).
    pub fn href(&self, base: &str, path: &str) -> String {
        match self {
            HistoryMode::Web if path == "/" && !base.is_empty() => base.to_string(),
            HistoryMode::Web => format!("{}{}", base, path),
            HistoryMode::Hash => format!("{}/#{}", base, path),
        }
    }

    /// Route path carried by a browser location
    ///
    /// Query strings and (in web mode) fragments are dropped. A location
    /// that is not in this mode's shape is taken as a bare route path:
    /// in web mode anything not below `base`, in hash mode anything
    /// without `#` other than `base` itself. Returns `None` only for a
    /// hash location outside `base`.
    pub fn route_path(&self, base: &str, location: &str) -> Option<String> {
        let (path, _query, fragment) = kondate_router::split_location(location);
        match self {
            HistoryMode::Web => {
                let rest = strip_base(base, path).unwrap_or(path);
                Some(kondate_router::normalize(rest))
            }
            HistoryMode::Hash => match fragment {
                Some(inner) => {
                    strip_base(base, path)?;
                    let (inner_path, _, _) = kondate_router::split_location(inner);
                    Some(kondate_router::normalize(inner_path))
                }
                // `/app/` with no fragment is the root route
                None if is_base(base, path) => Some("/".to_string()),
                None => Some(kondate_router::normalize(path)),
            },
        }
    }
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // same spellings as the serde form
        match s {
            "web" => Ok(HistoryMode::Web),
            "hash" => Ok(HistoryMode::Hash),
            _ => Err(Error::UnknownHistoryMode(s.to_string())),
        }
    }
}

/// Normalise a base path: `""`, `"/"` and `"app/"` become `""`, `""`, `"/app"`
pub fn normalize_base(base: &str) -> String {
    let n = kondate_router::normalize(base);
    if n == "/" { String::new() } else { n }
}

fn is_base(base: &str, path: &str) -> bool {
    !base.is_empty() && kondate_router::normalize(path) == base
}

fn strip_base<'a>(base: &str, path: &'a str) -> Option<&'a str> {
    if base.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix(base)?;
    // `/application` is not inside `/app`
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

/// Session history of a host
pub trait History {
    /// Current location (path plus optional query and fragment)
    fn location(&self) -> String;

    /// Add an entry; forward entries are discarded
    fn push(&mut self, url: &str);

    /// Overwrite the current entry
    fn replace(&mut self, url: &str);

    /// Step back one entry; false if already at the start
    fn back(&mut self) -> bool;

    /// Step forward one entry; false if already at the end
    fn forward(&mut self) -> bool;
}

/// In-memory [`History`] for tests and non-browser hosts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    /// History with one entry at `initial`
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, url: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url.to_string());
        self.cursor += 1;
    }

    fn replace(&mut self, url: &str) {
        self.entries[self.cursor] = url.to_string();
    }

    fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_href() {
        assert_eq!(HistoryMode::Web.href("", "/today"), "/today");
        assert_eq!(HistoryMode::Web.href("", "/"), "/");
        assert_eq!(HistoryMode::Web.href("/app", "/today"), "/app/today");
        assert_eq!(HistoryMode::Web.href("/app", "/"), "/app");
    }

    #[test]
    fn test_hash_href() {
        assert_eq!(HistoryMode::Hash.href("", "/today"), "/#/today");
        assert_eq!(HistoryMode::Hash.href("/app", "/"), "/app/#/");
    }

    #[test]
    fn test_web_route_path() {
        let m = HistoryMode::Web;
        assert_eq!(m.route_path("", "/today?date=1#x").as_deref(), Some("/today"));
        assert_eq!(m.route_path("/app", "/app/list/").as_deref(), Some("/list"));
        assert_eq!(m.route_path("/app", "/app").as_deref(), Some("/"));
        // not below the base: a bare route path
        assert_eq!(m.route_path("/app", "/application").as_deref(), Some("/application"));
        assert_eq!(m.route_path("/app", "/list").as_deref(), Some("/list"));
    }

    #[test]
    fn test_hash_route_path() {
        let m = HistoryMode::Hash;
        assert_eq!(m.route_path("", "/#/calendar").as_deref(), Some("/calendar"));
        assert_eq!(m.route_path("", "/").as_deref(), Some("/"));
        assert_eq!(m.route_path("/app", "/app/#/list?sort=asc").as_deref(), Some("/list"));
        assert_eq!(m.route_path("/app", "/other/#/list"), None);
        assert_eq!(m.route_path("/app", "/app/").as_deref(), Some("/"));
    }

    #[test]
    fn test_hash_mode_takes_bare_paths() {
        let m = HistoryMode::Hash;
        assert_eq!(m.route_path("", "/today").as_deref(), Some("/today"));
        assert_eq!(m.route_path("", "/today?day=mon").as_deref(), Some("/today"));
        assert_eq!(m.route_path("/app", "/list/").as_deref(), Some("/list"));
    }

    #[test]
    fn test_href_round_trips_through_route_path() {
        for mode in [HistoryMode::Web, HistoryMode::Hash] {
            for base in ["", "/app"] {
                for path in ["/", "/list", "/recipes/7"] {
                    let href = mode.href(base, path);
                    assert_eq!(mode.route_path(base, &href).as_deref(), Some(path), "{mode} {href}");
                }
            }
        }
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("web".parse::<HistoryMode>().unwrap(), HistoryMode::Web);
        assert_eq!("hash".parse::<HistoryMode>().unwrap(), HistoryMode::Hash);
        assert!("memory".parse::<HistoryMode>().is_err());
        assert!("Hash".parse::<HistoryMode>().is_err());
        assert!("history".parse::<HistoryMode>().is_err());
    }

    #[test]
    fn test_parse_agrees_with_config_form() {
        #[derive(Deserialize)]
        struct Wrapper {
            history: HistoryMode,
        }

        for text in ["web", "hash", "Hash", "WEB", "history"] {
            let from_str = text.parse::<HistoryMode>().ok();
            let from_toml = toml::from_str::<Wrapper>(&format!("history = {:?}", text))
                .ok()
                .map(|w| w.history);
            assert_eq!(from_str, from_toml, "{text}");
        }
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(""), "");
        assert_eq!(normalize_base("/"), "");
        assert_eq!(normalize_base("app/"), "/app");
    }

    #[test]
    fn test_memory_history() {
        let mut h = MemoryHistory::default();
        h.push("/list");
        h.push("/today");
        assert_eq!(h.location(), "/today");

        assert!(h.back());
        assert!(h.back());
        assert!(!h.back());
        assert_eq!(h.location(), "/");

        assert!(h.forward());
        assert_eq!(h.location(), "/list");

        // pushing drops the forward entry "/today"
        h.push("/calendar");
        assert!(!h.forward());
        assert_eq!(h.entries(), ["/", "/list", "/calendar"]);

        h.replace("/input");
        assert_eq!(h.location(), "/input");
        assert_eq!(h.len(), 3);
    }
}

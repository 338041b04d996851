//! Configuration parsing from kondate.toml
//!
//! ```toml
//! [router]
//! history = "web"      # or "hash"
//! base = "/app"
//! preset = "planner"   # or "input"
//!
//! [[routes]]
//! path = "/recipes/:id"
//! name = "recipe"
//! view = "TodaysMenu"
//! ```

use crate::history::HistoryMode;
use crate::preset::Preset;
use crate::route::RouteDefinition;
use crate::router::Router;
use crate::view::View;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application routing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub router: RouterConfig,

    /// Extra routes, declared after the preset's
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// `[router]` section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouterConfig {
    #[serde(default)]
    pub history: HistoryMode,

    /// Path the app is served below (e.g., "/app")
    #[serde(default)]
    pub base: Option<String>,

    /// Built-in table to start from
    #[serde(default)]
    pub preset: Option<Preset>,
}

/// One `[[routes]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    pub name: String,
    /// View identifier, see [`View::as_str`]
    pub view: String,
}

impl Default for Config {
    /// Planner preset, web history, served from the root
    fn default() -> Self {
        Self {
            router: RouterConfig {
                preset: Some(Preset::Planner),
                ..RouterConfig::default()
            },
            routes: Vec::new(),
        }
    }
}

impl Config {
    /// Configuration for a preset with no extra routes
    pub fn preset(preset: Preset, history: HistoryMode) -> Self {
        Self {
            router: RouterConfig {
                history,
                base: None,
                preset: Some(preset),
            },
            routes: Vec::new(),
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded router config");
        Ok(config)
    }

    /// Load from a file if it exists, otherwise use defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no router config, using defaults");
            Ok(Self::default())
        }
    }

    /// Route definitions: preset routes first, then `[[routes]]`
    pub fn route_definitions(&self) -> Result<Vec<RouteDefinition<View>>> {
        let mut routes = self
            .router
            .preset
            .map(|p| p.routes())
            .unwrap_or_default();

        for entry in &self.routes {
            let view = entry.view.parse::<View>()?;
            routes.push(RouteDefinition::new(entry.path.as_str(), entry.name.as_str(), view));
        }

        if routes.is_empty() {
            return Err(Error::EmptyTable);
        }
        Ok(routes)
    }

    /// Validate the table and construct the router
    pub fn build_router(&self) -> Result<Router<View>> {
        Router::builder(self.router.history)
            .base(self.router.base.clone().unwrap_or_default())
            .routes(self.route_definitions()?)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.router.history, HistoryMode::Web);
        assert_eq!(config.router.preset, Some(Preset::Planner));

        let router = config.build_router().unwrap();
        assert_eq!(router.len(), 4);
        assert_eq!(router.base(), "");
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml_str(
            r#"
            [router]
            history = "hash"
            base = "/app"
            preset = "input"

            [[routes]]
            path = "/calendar"
            name = "Calendar"
            view = "Calendar"
            "#,
        )
        .unwrap();

        assert_eq!(config.router.history, HistoryMode::Hash);
        assert_eq!(config.router.base.as_deref(), Some("/app"));

        let router = config.build_router().unwrap();
        let names: Vec<_> = router.table().names().collect();
        assert_eq!(
            names,
            ["Home", "IngredientInput", "IngredientList", "TodaysMenu", "Calendar"]
        );
        assert_eq!(router.href("Calendar", &[]).unwrap(), "/app/#/calendar");
    }

    #[test]
    fn test_routes_without_preset() {
        let config = Config::from_toml_str(
            r#"
            [[routes]]
            path = "/"
            name = "home"
            view = "Home"
            "#,
        )
        .unwrap();
        assert_eq!(config.router.preset, None);
        assert_eq!(config.build_router().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_file_has_no_routes() {
        let config = Config::from_toml_str("").unwrap();
        assert!(matches!(config.build_router(), Err(Error::EmptyTable)));
    }

    #[test]
    fn test_unknown_view() {
        let config = Config::from_toml_str(
            r#"
            [[routes]]
            path = "/settings"
            name = "settings"
            view = "Settings"
            "#,
        )
        .unwrap();
        assert!(matches!(config.build_router(), Err(Error::UnknownView(v)) if v == "Settings"));
    }

    #[test]
    fn test_extra_route_clashing_with_preset() {
        let config = Config::from_toml_str(
            r#"
            [router]
            preset = "planner"

            [[routes]]
            path = "/today/"
            name = "today"
            view = "TodaysMenu"
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.build_router(),
            Err(Error::DuplicatePath { existing, .. }) if existing == "todays-menu"
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            Config::from_toml_str("[router]\nhistory = \"memory\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/kondate.toml"),
            Err(Error::Io(_))
        ));
        assert_eq!(
            Config::load_or_default("/nonexistent/kondate.toml").unwrap(),
            Config::default()
        );
    }
}

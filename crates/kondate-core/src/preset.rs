//! Built-in route tables of the meal planner
//!
//! Two tables are in circulation and neither has been declared the
//! canonical one, so both are offered and configuration picks.

use crate::route::RouteDefinition;
use crate::view::View;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named, built-in route table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Home, ingredient list, today's menu, calendar; hyphenated names
    #[default]
    Planner,
    /// Home, ingredient input, ingredient list, today's menu; capitalised names
    Input,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Planner, Preset::Input];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Planner => "planner",
            Preset::Input => "input",
        }
    }

    /// `(path, name, view)` triples in declaration order
    pub fn entries(&self) -> &'static [(&'static str, &'static str, View)] {
        match self {
            Preset::Planner => &[
                ("/", "home", View::Home),
                ("/list", "ingredient-list", View::IngredientList),
                ("/today", "todays-menu", View::TodaysMenu),
                ("/calendar", "calendar", View::Calendar),
            ],
            Preset::Input => &[
                ("/", "Home", View::Home),
                ("/input", "IngredientInput", View::IngredientInput),
                ("/list", "IngredientList", View::IngredientList),
                ("/today", "TodaysMenu", View::TodaysMenu),
            ],
        }
    }

    pub fn routes(&self) -> Vec<RouteDefinition<View>> {
        self.entries()
            .iter()
            .map(|&(path, name, view)| RouteDefinition::new(path, name, view))
            .collect()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planner_table() {
        let routes = Preset::Planner.routes();
        let paths: Vec<_> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["/", "/list", "/today", "/calendar"]);
        assert!(routes.iter().all(|r| r.component != View::IngredientInput));
    }

    #[test]
    fn test_input_table() {
        let routes = Preset::Input.routes();
        let names: Vec<_> = routes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Home", "IngredientInput", "IngredientList", "TodaysMenu"]);
        assert!(routes.iter().all(|r| r.component != View::Calendar));
    }

    #[test]
    fn test_parse() {
        assert_eq!("planner".parse::<Preset>().unwrap(), Preset::Planner);
        assert_eq!("input".parse::<Preset>().unwrap(), Preset::Input);
        // same spellings the config file accepts
        assert!("INPUT".parse::<Preset>().is_err());
        assert!(matches!("legacy".parse::<Preset>(), Err(Error::UnknownPreset(_))));
    }
}

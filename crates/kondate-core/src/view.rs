//! Page-level views of the meal planner
//!
//! Views are opaque to the router: it only hands the matched variant back
//! to whoever mounts the page.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The application's view components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Home,
    IngredientInput,
    IngredientList,
    TodaysMenu,
    Calendar,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Home,
        View::IngredientInput,
        View::IngredientList,
        View::TodaysMenu,
        View::Calendar,
    ];

    /// Stable identifier, as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::IngredientInput => "IngredientInput",
            View::IngredientList => "IngredientList",
            View::TodaysMenu => "TodaysMenu",
            View::Calendar => "Calendar",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| Error::UnknownView(s.to_string()))
    }
}

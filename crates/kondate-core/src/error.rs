//! Error types for kondate-core

use thiserror::Error;

/// Result type alias for kondate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for route tables and routers
#[derive(Debug, Error)]
pub enum Error {
    /// Route declared with an empty name
    #[error("Route for path {path:?} has an empty name")]
    EmptyName { path: String },

    /// Path is empty, lacks a leading slash, or is not a valid pattern
    #[error("Invalid route path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    /// Two routes share a name
    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    /// Two routes share a path (after normalisation)
    #[error("Duplicate route path {path:?} (already declared by route {existing:?})")]
    DuplicatePath { path: String, existing: String },

    /// Table has no routes at all
    #[error("Route table is empty")]
    EmptyTable,

    /// Navigation by a name that is not in the table
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Navigation by name without a value for every path parameter
    #[error("Route {route:?} requires parameter {param:?}")]
    MissingParam { route: String, param: String },

    /// View identifier in configuration does not name a known view
    #[error("Unknown view: {0}")]
    UnknownView(String),

    /// Preset identifier in configuration does not name a known preset
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// History mode identifier is not "web" or "hash"
    #[error("Unknown history mode: {0}")]
    UnknownHistoryMode(String),

    /// Malformed configuration file
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// IO error while reading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

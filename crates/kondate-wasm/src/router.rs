//! Router - Re-exports from kondate-core
//!
//! Route tables and resolution live in kondate-core so native and WASM
//! builds share one implementation.

pub use kondate_core::{
    AppRouter, Config, HistoryMode, Navigator, Preset, Resolution, RouteMatch, Router, View,
};

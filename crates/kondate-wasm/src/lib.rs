//! kondate-wasm: Browser bindings for the kondate route table
//!
//! Exposes the planner router to JavaScript and drives the browser's
//! History API.

pub mod router;

#[cfg(feature = "wasm")]
mod history;

#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use history::BrowserHistory;

#[cfg(feature = "wasm")]
pub use wasm::*;

pub use router::{AppRouter, Config, HistoryMode, Preset, Resolution, View};

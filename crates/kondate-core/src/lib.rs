//! kondate-core: Route tables for the kondate meal planner
//!
//! Maps URL paths to the planner's page views and binds the table to a
//! history strategy. Shared by native hosts and the WASM bindings.
//!
//! ## Bootstrap
//! Build the router once with [`init`] and pass it down; nothing here is
//! global.
//!
//! ```
//! use kondate_core::{init, Config, View};
//!
//! let router = init(&Config::default()).unwrap();
//! assert_eq!(router.resolve("/today").into_match().unwrap().component, View::TodaysMenu);
//! assert_eq!(router.path_for("calendar", &[]).unwrap(), "/calendar");
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod history;
pub mod navigator;
pub mod preset;
pub mod route;
pub mod router;
pub mod table;
pub mod view;

// Re-exports
pub use config::{Config, RouteEntry, RouterConfig};
pub use error::{Error, Result};
pub use history::{History, HistoryMode, MemoryHistory};
pub use navigator::Navigator;
pub use preset::Preset;
pub use route::RouteDefinition;
pub use router::{Resolution, RouteMatch, Router, RouterBuilder};
pub use table::RouteTable;
pub use view::View;

/// Router over the application's views
pub type AppRouter = Router<View>;

/// Build the application router from configuration
///
/// Call once at startup.
pub fn init(config: &Config) -> Result<AppRouter> {
    tracing::info!(
        preset = config.router.preset.map(|p| p.as_str()).unwrap_or("none"),
        extra_routes = config.routes.len(),
        "initialising router"
    );
    config.build_router()
}

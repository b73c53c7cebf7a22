//! Admin single-page application.
//!
//! [`bootstrap`] creates the application, attaches its one router over the
//! [`AdminRoute`] table, and mounts it onto `#app`. The `client` binary does
//! this in the browser; the `server` binary does the same in memory to
//! pre-render every page it serves.

mod bootstrap;
pub mod config;
pub mod layout;
pub mod pages;
pub mod routes;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;

pub use bootstrap::{AdminError, bootstrap, create_app, route_table};
pub use config::{AdminConfig, AppConfig, ConfigError, ServerConfig};
pub use layout::AdminLayout;
pub use routes::AdminRoute;

/// Selector of the element the application mounts onto.
pub const ANCHOR: &str = "#app";

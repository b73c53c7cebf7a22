//! Route table and client-side router for panel applications.
//!
//! A [`RouteTable`] maps paths and names to components. A [`Router`] tracks
//! the current entry of that table against a [`History`] backend, using
//! push-state navigation. In the browser, [`ClientRouter`] feeds link
//! clicks, `panel:navigate` events and `popstate` into the router.

use std::collections::HashMap;

mod error;
mod history;
mod location;
mod path;
mod route;
mod router;

#[cfg(target_arch = "wasm32")]
mod client_router;

/// Route parameters, keyed by the `{name}` used in the path pattern.
pub type Params = HashMap<String, String>;

pub use error::{HistoryError, NavigationError, RouteTableError};
pub use history::{History, MemoryHistory};
pub use location::Location;
pub use route::{MatchedRoute, Route, RouteTable, RouteTableBuilder};
pub use router::{RouteState, Router};

#[cfg(target_arch = "wasm32")]
pub use client_router::{ClientRouter, dispatch_navigate};
#[cfg(target_arch = "wasm32")]
pub use history::BrowserHistory;

/// Attribute marking anchors the router handles without a page reload.
pub const LINK_ATTRIBUTE: &str = "data-panel-link";

/// Custom DOM event carrying a navigation target in its `detail`.
pub const NAVIGATE_EVENT: &str = "panel:navigate";

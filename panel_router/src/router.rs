//! The navigation state machine: one current route, swapped on demand.

use std::{fmt, sync::Arc};

use crate::{
    History, Location, MatchedRoute, NavigationError, Params, RouteTable,
    path::{is_path_prefix, normalize_path},
};

/// What the router currently points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteState {
    /// A route of the table is current.
    Matched(MatchedRoute),
    /// The history points at a path no route matches.
    NotFound {
        /// Normalized path.
        path: String,
    },
}

impl RouteState {
    /// The matched route, if any.
    pub fn matched(&self) -> Option<&MatchedRoute> {
        match self {
            RouteState::Matched(matched) => Some(matched),
            RouteState::NotFound { .. } => None,
        }
    }

    /// Normalized current path.
    pub fn path(&self) -> &str {
        match self {
            RouteState::Matched(matched) => &matched.path,
            RouteState::NotFound { path } => path,
        }
    }

    /// Name of the current route, if any.
    pub fn name(&self) -> Option<&str> {
        self.matched().map(|matched| matched.name.as_str())
    }

    /// Whether the named route of `table` is current, or its path is a
    /// leading part of the current path.
    pub fn is_active<C>(&self, table: &RouteTable<C>, name: &str) -> bool {
        let Some(route) = table.by_name(name) else {
            return false;
        };

        match self {
            RouteState::Matched(matched) if matched.name == name => true,
            _ => is_path_prefix(route.path(), self.path()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Replace,
}

/// Client-side router over an immutable [`RouteTable`] and a [`History`].
///
/// The router never changes the table; it only tracks which entry is
/// current. Unknown paths still update the history and leave the router in
/// [`RouteState::NotFound`], which renders nothing. Unknown names are
/// rejected before the history is touched.
pub struct Router<C, H> {
    table: Arc<RouteTable<C>>,
    history: H,
    state: RouteState,
}

impl<C, H: History> Router<C, H> {
    /// Create a router and resolve the history's current location.
    pub fn new(table: impl Into<Arc<RouteTable<C>>>, history: H) -> Self {
        let table = table.into();
        let state = Self::resolve_current(&table, &history);

        Self {
            table,
            history,
            state,
        }
    }

    /// Push a new history entry for `target` and make it current.
    pub fn navigate(&mut self, target: impl Into<Location>) -> Result<MatchedRoute, NavigationError> {
        self.transition(target.into(), HistoryMode::Push)
    }

    /// Like [`Router::navigate`], but replaces the current history entry.
    pub fn replace(&mut self, target: impl Into<Location>) -> Result<MatchedRoute, NavigationError> {
        self.transition(target.into(), HistoryMode::Replace)
    }

    /// Re-read the history's location, e.g. after a `popstate` event.
    pub fn sync(&mut self) -> &RouteState {
        self.state = Self::resolve_current(&self.table, &self.history);

        &self.state
    }

    /// The current state.
    pub fn current(&self) -> &RouteState {
        &self.state
    }

    /// Component of the current route; `None` when nothing matches.
    pub fn current_component(&self) -> Option<&C> {
        self.state
            .matched()
            .and_then(|matched| self.table.component(matched))
    }

    /// The route table.
    pub fn table(&self) -> &RouteTable<C> {
        &self.table
    }

    /// The history backend.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutable access to the history backend; call [`Router::sync`] afterwards.
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Concrete path of a named route.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, NavigationError> {
        self.table.href(name, params)
    }

    /// Whether the named route is current or an ancestor path of the current one.
    pub fn is_active(&self, name: &str) -> bool {
        self.state.is_active(&self.table, name)
    }

    fn transition(
        &mut self,
        location: Location,
        mode: HistoryMode,
    ) -> Result<MatchedRoute, NavigationError> {
        match self.table.resolve(&location) {
            Ok(matched) => {
                let href = match &location {
                    Location::Path(raw) => raw.clone(),
                    Location::Named { .. } => matched.path.clone(),
                };

                if self.is_current(&href) {
                    tracing::debug!(path = %matched.path, "already at target, skipping navigation");
                } else {
                    self.write_history(&href, mode)?;
                    tracing::debug!(route = %matched.name, path = %matched.path, "navigated");
                }

                self.state = RouteState::Matched(matched.clone());
                Ok(matched)
            }
            Err(NavigationError::NoMatch { path }) => {
                // only path targets can miss; names fail with UnknownName
                let href = match &location {
                    Location::Path(raw) => raw.clone(),
                    Location::Named { .. } => path.clone(),
                };

                if !self.is_current(&href) {
                    self.write_history(&href, mode)?;
                }
                tracing::warn!(path = %path, "no route matches path");

                self.state = RouteState::NotFound { path: path.clone() };
                Err(NavigationError::NoMatch { path })
            }
            Err(err) => {
                tracing::warn!(location = %location, error = %err, "navigation rejected");
                Err(err)
            }
        }
    }

    /// Whether the history already shows exactly `href`, query included.
    fn is_current(&self, href: &str) -> bool {
        self.history
            .current_path()
            .is_ok_and(|current| current == href)
    }

    fn write_history(&mut self, path: &str, mode: HistoryMode) -> Result<(), NavigationError> {
        match mode {
            HistoryMode::Push => self.history.push(path)?,
            HistoryMode::Replace => self.history.replace(path)?,
        }

        Ok(())
    }

    fn resolve_current(table: &RouteTable<C>, history: &H) -> RouteState {
        let raw = history.current_path().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not read history location, assuming `/`");
            String::from("/")
        });
        let path = normalize_path(&raw);

        match table.resolve(&Location::Path(raw)) {
            Ok(matched) => RouteState::Matched(matched),
            Err(err) => {
                tracing::warn!(error = %err, "current location matches no route");
                RouteState::NotFound { path }
            }
        }
    }
}

impl<C, H: fmt::Debug> fmt::Debug for Router<C, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.table.len())
            .field("history", &self.history)
            .field("state", &self.state)
            .finish()
    }
}

//! The route table: an ordered, immutable list of (path, name, component)
//! entries with lookup by concrete path and by name.

use matchit::Router;
use std::{collections::HashMap, fmt};

use crate::{
    Location, NavigationError, Params, RouteTableError,
    path::{fill_params, normalize_path, pattern_params},
};

/// A single entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<C> {
    path: String,
    name: String,
    component: C,
}

impl<C> Route<C> {
    /// Path pattern, e.g. `/admin/users`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Symbolic name, e.g. `admin.users`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Component rendered when this route is current.
    pub fn component(&self) -> &C {
        &self.component
    }
}

/// Result of resolving a [`Location`] against a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute {
    /// Position of the route in the table.
    pub index: usize,
    /// Route name.
    pub name: String,
    /// Route path pattern.
    pub pattern: String,
    /// Concrete, normalized path.
    pub path: String,
    /// Values of the pattern's parameters.
    pub params: Params,
}

/// Immutable, ordered route table.
///
/// Paths and names are unique across the table. Construction goes through
/// [`RouteTable::builder`]; there is no way to add or remove routes after
/// [`RouteTableBuilder::build`].
pub struct RouteTable<C> {
    routes: Vec<Route<C>>,
    matcher: Router<usize>,
    names: HashMap<String, usize>,
}

impl<C> RouteTable<C> {
    /// Start building a table.
    pub fn builder() -> RouteTableBuilder<C> {
        RouteTableBuilder { routes: Vec::new() }
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[Route<C>] {
        &self.routes
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Route at `index`, as reported by [`MatchedRoute::index`].
    pub fn get(&self, index: usize) -> Option<&Route<C>> {
        self.routes.get(index)
    }

    /// Route registered under `name`.
    pub fn by_name(&self, name: &str) -> Option<&Route<C>> {
        self.names.get(name).map(|&index| &self.routes[index])
    }

    /// Component of a matched route.
    pub fn component(&self, matched: &MatchedRoute) -> Option<&C> {
        self.get(matched.index).map(Route::component)
    }

    /// Resolve a navigation target to exactly one route.
    pub fn resolve(&self, location: &Location) -> Result<MatchedRoute, NavigationError> {
        match location {
            Location::Path(raw) => self.match_path(raw),
            Location::Named { name, params } => self.match_name(name, params),
        }
    }

    /// Build the concrete path of a named route.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, NavigationError> {
        self.match_name(name, params).map(|matched| matched.path)
    }

    fn match_path(&self, raw: &str) -> Result<MatchedRoute, NavigationError> {
        let path = normalize_path(raw);

        let Ok(found) = self.matcher.at(&path) else {
            return Err(NavigationError::NoMatch { path });
        };

        let index = *found.value;
        let route = &self.routes[index];
        let params: Params = found
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();

        Ok(MatchedRoute {
            index,
            name: route.name.clone(),
            pattern: route.path.clone(),
            path,
            params,
        })
    }

    fn match_name(&self, name: &str, params: &Params) -> Result<MatchedRoute, NavigationError> {
        let Some(&index) = self.names.get(name) else {
            return Err(NavigationError::UnknownName {
                name: name.to_owned(),
            });
        };

        let route = &self.routes[index];
        let path = fill_params(&route.path, params).map_err(|param| {
            NavigationError::MissingParam {
                name: name.to_owned(),
                param: param.to_owned(),
            }
        })?;

        let declared = pattern_params(&route.path);
        let used: Params = params
            .iter()
            .filter(|(key, _)| declared.contains(&key.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        if used.len() < params.len() {
            tracing::warn!(
                route = name,
                discarded = params.len() - used.len(),
                "discarding params the route path does not declare"
            );
        }

        Ok(MatchedRoute {
            index,
            name: route.name.clone(),
            pattern: route.path.clone(),
            path,
            params: used,
        })
    }
}

impl<C: fmt::Debug> fmt::Debug for RouteTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes)
            .field("matcher", &"<Router<usize>>")
            .finish()
    }
}

/// Collects routes in order, then validates them into a [`RouteTable`].
#[derive(Debug)]
pub struct RouteTableBuilder<C> {
    routes: Vec<Route<C>>,
}

impl<C> RouteTableBuilder<C> {
    /// Append a route.
    pub fn route(mut self, path: impl Into<String>, name: impl Into<String>, component: C) -> Self {
        self.routes.push(Route {
            path: path.into(),
            name: name.into(),
            component,
        });

        self
    }

    /// Validate uniqueness and register every route with the matcher.
    pub fn build(self) -> Result<RouteTable<C>, RouteTableError> {
        let mut matcher = Router::new();
        let mut names = HashMap::new();
        let mut paths = HashMap::new();

        for (index, route) in self.routes.iter().enumerate() {
            if !route.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath {
                    path: route.path.clone(),
                });
            }

            if route.name.is_empty() {
                return Err(RouteTableError::EmptyName {
                    path: route.path.clone(),
                });
            }

            if paths.insert(normalize_path(&route.path), index).is_some() {
                return Err(RouteTableError::DuplicatePath {
                    path: route.path.clone(),
                });
            }

            if names.insert(route.name.clone(), index).is_some() {
                return Err(RouteTableError::DuplicateName {
                    name: route.name.clone(),
                });
            }

            matcher
                .insert(normalize_path(&route.path), index)
                .map_err(|source| RouteTableError::Insert {
                    path: route.path.clone(),
                    source,
                })?;
        }

        tracing::debug!(routes = self.routes.len(), "route table built");

        Ok(RouteTable {
            routes: self.routes,
            matcher,
            names,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable<&'static str> {
        RouteTable::builder()
            .route("/admin/dashboard", "admin.dashboard", "Dashboard")
            .route("/admin/users", "admin.users", "ListUsers")
            .route("/admin/users/{id}", "admin.users.edit", "EditUser")
            .build()
            .unwrap()
    }

    #[test]
    fn test_resolve_by_path() {
        let table = table();
        let matched = table.resolve(&Location::from("/admin/users")).unwrap();

        assert_eq!(matched.name, "admin.users");
        assert_eq!(table.component(&matched), Some(&"ListUsers"));
        assert!(matched.params.is_empty());
    }

    #[test]
    fn test_resolve_normalizes_path() {
        let table = table();

        for raw in ["/admin/users/", "/admin/users?page=2", "/admin/users#list"] {
            let matched = table.resolve(&Location::from(raw)).unwrap();
            assert_eq!(matched.name, "admin.users", "{raw}");
            assert_eq!(matched.path, "/admin/users");
        }
    }

    #[test]
    fn test_resolve_extracts_params() {
        let table = table();
        let matched = table.resolve(&Location::from("/admin/users/12")).unwrap();

        assert_eq!(matched.name, "admin.users.edit");
        assert_eq!(matched.params.get("id").map(String::as_str), Some("12"));
    }

    #[test]
    fn test_resolve_by_name_with_params() {
        let table = table();
        let matched = table
            .resolve(&Location::named("admin.users.edit").param("id", "5"))
            .unwrap();

        assert_eq!(matched.path, "/admin/users/5");
        assert_eq!(table.component(&matched), Some(&"EditUser"));
    }

    #[test]
    fn test_resolve_by_name_drops_undeclared_params() {
        let table = table();
        let matched = table
            .resolve(&Location::named("admin.users").param("page", "2"))
            .unwrap();

        assert_eq!(matched.path, "/admin/users");
        assert!(matched.params.is_empty());
    }

    #[test]
    fn test_resolve_failures() {
        let table = table();

        assert_eq!(
            table.resolve(&Location::from("/admin/unknown")),
            Err(NavigationError::NoMatch {
                path: "/admin/unknown".to_owned()
            })
        );
        assert_eq!(
            table.resolve(&Location::named("admin.unknown")),
            Err(NavigationError::UnknownName {
                name: "admin.unknown".to_owned()
            })
        );
        assert_eq!(
            table.resolve(&Location::named("admin.users.edit")),
            Err(NavigationError::MissingParam {
                name: "admin.users.edit".to_owned(),
                param: "id".to_owned()
            })
        );
    }

    #[test]
    fn test_href() {
        let table = table();

        assert_eq!(
            table.href("admin.dashboard", &Params::new()).unwrap(),
            "/admin/dashboard"
        );
        assert!(table.href("nope", &Params::new()).is_err());
    }

    #[test]
    fn test_builder_rejects_duplicate_path() {
        let err = RouteTable::builder()
            .route("/admin/users", "admin.users", ())
            .route("/admin/users/", "admin.people", ())
            .build()
            .unwrap_err();

        assert!(matches!(err, RouteTableError::DuplicatePath { path } if path == "/admin/users/"));
    }

    #[test]
    fn test_builder_rejects_duplicate_name() {
        let err = RouteTable::builder()
            .route("/admin/users", "admin.users", ())
            .route("/admin/people", "admin.users", ())
            .build()
            .unwrap_err();

        assert!(matches!(err, RouteTableError::DuplicateName { name } if name == "admin.users"));
    }

    #[test]
    fn test_builder_rejects_malformed_routes() {
        let err = RouteTable::builder()
            .route("admin/users", "admin.users", ())
            .build()
            .unwrap_err();
        assert!(matches!(err, RouteTableError::InvalidPath { .. }));

        let err = RouteTable::builder()
            .route("/admin/users", "", ())
            .build()
            .unwrap_err();
        assert!(matches!(err, RouteTableError::EmptyName { .. }));

        let err = RouteTable::builder()
            .route("/admin/{id}", "admin.by_id", ())
            .route("/admin/{slug}", "admin.by_slug", ())
            .build()
            .unwrap_err();
        assert!(matches!(err, RouteTableError::Insert { .. }));
    }

    #[test]
    fn test_order_is_preserved() {
        let table = table();
        let names: Vec<&str> = table.routes().iter().map(Route::name).collect();

        assert_eq!(
            names,
            vec!["admin.dashboard", "admin.users", "admin.users.edit"]
        );
        assert_eq!(table.len(), 3);
        assert!(table.by_name("admin.users").is_some());
    }
}

//! Navigation targets: a concrete path or a route name with parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Params;

/// A navigation target: either a concrete path or a route name.
///
/// Named locations carry the parameters substituted into the route's path
/// pattern. Routes without parameters take an empty map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    /// A concrete path such as `/admin/users`, optionally with query and fragment.
    Path(String),
    /// A symbolic route name such as `admin.users`.
    Named {
        /// Route name as registered in the table.
        name: String,
        /// Values for the `{param}` segments of the route's path.
        #[serde(default)]
        params: Params,
    },
}

impl Location {
    /// Target a route by name, without parameters.
    pub fn named(name: impl Into<String>) -> Self {
        Location::Named {
            name: name.into(),
            params: Params::new(),
        }
    }

    /// Add a parameter to a named location. Paths are returned unchanged.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Location::Named { params, .. } = &mut self {
            params.insert(key.into(), value.into());
        }

        self
    }
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Location::Path(path.to_owned())
    }
}

impl From<String> for Location {
    fn from(path: String) -> Self {
        Location::Path(path)
    }
}

impl From<&Location> for Location {
    fn from(location: &Location) -> Self {
        location.clone()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Path(path) => f.write_str(path),
            Location::Named { name, params } if params.is_empty() => write!(f, "{{{name}}}"),
            Location::Named { name, params } => {
                let mut pairs: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
                pairs.sort();
                write!(f, "{{{name} {}}}", pairs.join(","))
            }
        }
    }
}

use thiserror::Error;

/// Errors raised while building a [`RouteTable`](crate::RouteTable).
#[derive(Debug, Error)]
pub enum RouteTableError {
    /// Two routes declare the same path.
    #[error("duplicate route path `{path}`")]
    DuplicatePath {
        /// The offending path.
        path: String,
    },

    /// Two routes declare the same name.
    #[error("duplicate route name `{name}`")]
    DuplicateName {
        /// The offending name.
        name: String,
    },

    /// A route was registered without a name.
    #[error("route `{path}` has an empty name")]
    EmptyName {
        /// Path of the unnamed route.
        path: String,
    },

    /// A path does not start with `/`.
    #[error("route path `{path}` must start with `/`")]
    InvalidPath {
        /// The offending path.
        path: String,
    },

    /// The matcher refused the pattern (conflicting or malformed parameters).
    #[error("failed to insert route `{path}`: {source}")]
    Insert {
        /// The offending path.
        path: String,
        /// Matcher error.
        #[source]
        source: matchit::InsertError,
    },
}

/// Errors reported when a navigation target cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No route pattern matches the path.
    #[error("no route matches path `{path}`")]
    NoMatch {
        /// Normalized path that failed to match.
        path: String,
    },

    /// No route carries the requested name.
    #[error("no route named `{name}`")]
    UnknownName {
        /// Requested name.
        name: String,
    },

    /// A named navigation lacks a value for one of the route's parameters.
    #[error("missing param `{param}` for route `{name}`")]
    MissingParam {
        /// Route name.
        name: String,
        /// Parameter the route's path requires.
        param: String,
    },

    /// The history backend refused the transition.
    #[error(transparent)]
    History(#[from] HistoryError),
}

/// Error surfaced by a [`History`](crate::History) backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("history error: {message}")]
pub struct HistoryError {
    message: String,
}

impl HistoryError {
    /// Wrap a backend message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The backend message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

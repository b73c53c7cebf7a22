use crate::{Component, Location, RouteTable, RouteTableError};

/// A fixed set of routes declared as an enum.
///
/// Usually derived with `#[derive(Routes)]`, which also rejects duplicate
/// paths and names at compile time:
///
/// ```rust,ignore
/// #[derive(Routes, Clone, Copy, Debug, PartialEq, Eq)]
/// pub enum AdminRoute {
///     #[route(path = "/admin/dashboard", name = "admin.dashboard", component = Dashboard)]
///     Dashboard,
/// }
/// ```
pub trait Routes: Copy + Sized + 'static {
    /// Every route, in declaration order.
    const ALL: &'static [Self];

    /// Path pattern of the route.
    fn path(self) -> &'static str;

    /// Symbolic name of the route.
    fn name(self) -> &'static str;

    /// Component rendered for the route.
    fn component(self) -> Component;

    /// Build the route table, in declaration order.
    fn table() -> Result<RouteTable<Component>, RouteTableError> {
        Self::ALL
            .iter()
            .fold(RouteTable::builder(), |builder, route| {
                builder.route(route.path(), route.name(), route.component())
            })
            .build()
    }

    /// Navigation target for the route.
    fn location(self) -> Location {
        Location::named(self.name())
    }

    /// Route registered under `name`.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|route| route.name() == name)
    }
}

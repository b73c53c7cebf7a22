mod generate_routes;
mod parse_route_args;
mod validate_routes;

pub(crate) use generate_routes::generate_routes;
pub(crate) use parse_route_args::{RouteArgs, parse_route_args};
pub(crate) use validate_routes::{validate_enum, validate_routes};

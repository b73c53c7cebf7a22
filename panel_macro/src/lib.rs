#![allow(missing_docs)]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use crate::routes::generate_routes;

mod routes;

/// Derive `panel::Routes` for an enum of unit variants, one per route:
///
/// ```rust,ignore
/// #[derive(Routes, Clone, Copy)]
/// enum AppRoute {
///     #[route(path = "/admin/users", name = "admin.users", component = ListUsers)]
///     Users,
/// }
/// ```
#[proc_macro_derive(Routes, attributes(route))]
pub fn derive_routes(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    generate_routes(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

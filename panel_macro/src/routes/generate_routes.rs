use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result};

use super::{RouteArgs, parse_route_args, validate_enum, validate_routes};

/// Generate the `::panel::Routes` impl for a route enum.
pub(crate) fn generate_routes(input: DeriveInput) -> Result<TokenStream> {
    let data = validate_enum(&input)?;

    let routes = data
        .variants
        .iter()
        .map(parse_route_args)
        .collect::<Result<Vec<RouteArgs>>>()?;

    validate_routes(&routes)?;

    let enum_name = &input.ident;
    let variants: Vec<_> = routes.iter().map(|route| &route.variant).collect();
    let paths = routes.iter().map(|route| &route.path);
    let names = routes.iter().map(|route| &route.name);
    let components = routes.iter().map(|route| &route.component);

    Ok(quote! {
        impl ::panel::Routes for #enum_name {
            const ALL: &'static [Self] = &[#(Self::#variants),*];

            fn path(self) -> &'static str {
                match self {
                    #(Self::#variants => #paths,)*
                }
            }

            fn name(self) -> &'static str {
                match self {
                    #(Self::#variants => #names,)*
                }
            }

            fn component(self) -> ::panel::Component {
                match self {
                    #(Self::#variants => ::panel::Component::of::<#components>(),)*
                }
            }
        }
    })
}

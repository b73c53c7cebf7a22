use std::collections::HashMap;

use syn::{Data, DeriveInput, Fields, Result};

use super::RouteArgs;

/// Check the derive input is an enum of unit variants.
pub(crate) fn validate_enum(input: &DeriveInput) -> Result<&syn::DataEnum> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[derive(Routes)] only supports enums",
        ));
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(Routes)] does not support generic enums",
        ));
    }

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[derive(Routes)] needs at least one route variant",
        ));
    }

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("route variant `{}` must not carry fields", variant.ident),
            ));
        }
    }

    Ok(data)
}

/// Check paths start with `/`, names are not empty, and both are unique.
/// Paths are compared the way the route table compares them.
///
/// All problems are reported together.
pub(crate) fn validate_routes(routes: &[RouteArgs]) -> Result<()> {
    let mut errors: Vec<syn::Error> = Vec::new();

    let mut paths: HashMap<String, &syn::Ident> = HashMap::new();
    let mut names: HashMap<String, &syn::Ident> = HashMap::new();

    for route in routes {
        let path = route.path.value();
        let name = route.name.value();

        if !path.starts_with('/') {
            errors.push(syn::Error::new_spanned(
                &route.path,
                format!("route path `{path}` must start with `/`"),
            ));
        }

        if name.trim().is_empty() {
            errors.push(syn::Error::new_spanned(&route.name, "route name must not be empty"));
        }

        let first = *paths.entry(normalize_path(&path)).or_insert(&route.variant);
        if !std::ptr::eq(first, &route.variant) {
            errors.push(syn::Error::new_spanned(
                &route.path,
                format!(
                    "duplicate route path `{path}` on `{}`, already used by `{first}`",
                    route.variant
                ),
            ));
        }

        let first = *names.entry(name.clone()).or_insert(&route.variant);
        if !std::ptr::eq(first, &route.variant) {
            errors.push(syn::Error::new_spanned(
                &route.name,
                format!(
                    "duplicate route name `{name}` on `{}`, already used by `{first}`",
                    route.variant
                ),
            ));
        }
    }

    match errors.into_iter().reduce(|mut combined, error| {
        combined.combine(error);
        combined
    }) {
        Some(combined) => Err(combined),
        None => Ok(()),
    }
}

/// Path as the route table compares it: no query or fragment, no trailing
/// slash except on the root.
fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = raw[..end].trim();

    let mut normalized = if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    };

    if normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }

    normalized
}

use proc_macro2::Span;
use syn::{
    Attribute, Expr, ExprLit, ExprPath, Lit, LitStr, Meta, Path, Result, Token, Variant,
    punctuated::Punctuated,
};

/// Arguments parsed from a variant's `#[route(...)]` attribute.
#[derive(Debug)]
pub(crate) struct RouteArgs {
    pub variant: syn::Ident,
    pub path: LitStr,
    pub name: LitStr,
    pub component: Path,
}

/// Parse `#[route(path = "...", name = "...", component = Type)]` on `variant`.
pub(crate) fn parse_route_args(variant: &Variant) -> Result<RouteArgs> {
    let mut attrs = variant.attrs.iter().filter(|attr| attr.path().is_ident("route"));

    let Some(attr) = attrs.next() else {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            format!("variant `{}` is missing a #[route(...)] attribute", variant.ident),
        ));
    };

    if let Some(extra) = attrs.next() {
        return Err(syn::Error::new_spanned(
            extra,
            "only one #[route(...)] attribute is allowed per variant",
        ));
    }

    let mut path = None;
    let mut name = None;
    let mut component = None;

    for meta in parse_metas(attr)? {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "expected `key = value`, one of `path`, `name`, `component`",
            ));
        };

        if name_value.path.is_ident("path") {
            path = Some(expect_str(&name_value.value, "path")?);
        } else if name_value.path.is_ident("name") {
            name = Some(expect_str(&name_value.value, "name")?);
        } else if name_value.path.is_ident("component") {
            let Expr::Path(ExprPath { path: type_path, .. }) = &name_value.value else {
                return Err(syn::Error::new_spanned(
                    &name_value.value,
                    "`component` must be a type path, e.g. `component = ListUsers`",
                ));
            };
            component = Some(type_path.clone());
        } else {
            return Err(syn::Error::new_spanned(
                &name_value.path,
                "unknown route argument, expected `path`, `name` or `component`",
            ));
        }
    }

    let missing = |key: &str| {
        syn::Error::new(
            attr_span(attr),
            format!("#[route(...)] on `{}` is missing `{key}`", variant.ident),
        )
    };

    Ok(RouteArgs {
        variant: variant.ident.clone(),
        path: path.ok_or_else(|| missing("path"))?,
        name: name.ok_or_else(|| missing("name"))?,
        component: component.ok_or_else(|| missing("component"))?,
    })
}

fn parse_metas(attr: &Attribute) -> Result<Punctuated<Meta, Token![,]>> {
    attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
}

fn expect_str(value: &Expr, key: &str) -> Result<LitStr> {
    match value {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.clone()),
        _ => Err(syn::Error::new_spanned(
            value,
            format!("`{key}` must be a string literal"),
        )),
    }
}

fn attr_span(attr: &Attribute) -> Span {
    attr.pound_token.span
}

// Path helpers shared by the route table and the router.
//
// Patterns use the matcher syntax: literal segments plus `{name}` parameter
// segments (and `{*name}` catch-alls). Concrete paths are what the history
// reports, possibly with a query string, a fragment or a trailing slash.

use crate::Params;

/// Reduce a concrete path to the form the matcher sees.
///
/// - query string and fragment are dropped
/// - a missing leading slash is added
/// - a single trailing slash is removed, except for the root path
pub(crate) fn normalize_path(raw: &str) -> String {
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

fn param_name(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .map(|s| s.trim_start_matches('*'))
}

/// Names of the parameters declared by a pattern, in order.
pub(crate) fn pattern_params(pattern: &str) -> Vec<&str> {
    pattern.split('/').filter_map(param_name).collect()
}

/// Build a concrete path from a pattern by substituting its parameters.
///
/// Returns the name of the first parameter the map does not provide.
pub(crate) fn fill_params<'p>(pattern: &'p str, params: &Params) -> Result<String, &'p str> {
    let mut segments = Vec::new();

    for segment in pattern.split('/') {
        match param_name(segment) {
            Some(name) => match params.get(name) {
                Some(value) => segments.push(value.as_str()),
                None => return Err(name),
            },
            None => segments.push(segment),
        }
    }

    Ok(segments.join("/"))
}

/// Whether every segment of `pattern` matches the leading segments of `path`.
///
/// Segments are compared pairwise; parameter segments match anything. A
/// pattern longer than the path never matches.
pub(crate) fn is_path_prefix(pattern: &str, path: &str) -> bool {
    let pattern = normalize_path(pattern);
    let path = normalize_path(path);

    if pattern == "/" {
        return path == "/";
    }

    let pattern_segments: Vec<&str> = pattern.trim_start_matches('/').split('/').collect();
    let path_segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    if pattern_segments.len() > path_segments.len() {
        return false;
    }

    pattern_segments
        .iter()
        .zip(path_segments.iter())
        .all(|(pattern_seg, path_seg)| pattern_seg == path_seg || param_name(pattern_seg).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/admin/users"), "/admin/users");
        assert_eq!(normalize_path("/admin/users/"), "/admin/users");
        assert_eq!(normalize_path("/admin/users?page=2"), "/admin/users");
        assert_eq!(normalize_path("/admin/users#top"), "/admin/users");
        assert_eq!(normalize_path("admin/users"), "/admin/users");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/?tab=1"), "/");
    }

    #[test]
    fn test_fill_params() {
        let mut params = Params::new();
        params.insert("id".to_owned(), "42".to_owned());

        assert_eq!(fill_params("/admin/users/{id}", &params), Ok("/admin/users/42".to_owned()));
        assert_eq!(fill_params("/admin/users", &params), Ok("/admin/users".to_owned()));
        assert_eq!(fill_params("/admin/{section}/{id}", &params), Err("section"));
        assert_eq!(fill_params("/files/{*rest}", &params), Err("rest"));
    }

    #[test]
    fn test_pattern_params() {
        assert_eq!(pattern_params("/admin/users"), Vec::<&str>::new());
        assert_eq!(pattern_params("/api/{version}/users/{id}"), vec!["version", "id"]);
        assert_eq!(pattern_params("/files/{*rest}"), vec!["rest"]);
    }

    #[test]
    fn test_is_path_prefix() {
        assert!(is_path_prefix("/admin/users", "/admin/users"));
        assert!(is_path_prefix("/admin/users", "/admin/users/7/edit"));
        assert!(is_path_prefix("/admin/users/", "/admin/users?page=3"));
        assert!(!is_path_prefix("/admin/users", "/admin/settings"));
        assert!(!is_path_prefix("/admin/users", "/admin"));
        assert!(!is_path_prefix("/admin/user", "/admin/users"));
        assert!(is_path_prefix("/", "/"));
        assert!(!is_path_prefix("/", "/admin"));
        assert!(!is_path_prefix("/users", "/home"));
        assert!(!is_path_prefix("/users", "/admin/dashboard"));
        assert!(!is_path_prefix("/users", "/"));
        assert!(is_path_prefix("/users", "/users/7"));
        assert!(is_path_prefix("/users/{id}", "/users/7/edit"));
        assert!(!is_path_prefix("/users/{id}", "/users"));
    }
}

#![allow(missing_docs)]

use panel_router::{
    History, Location, MemoryHistory, NavigationError, RouteState, RouteTable, Router,
};

fn table() -> RouteTable<&'static str> {
    RouteTable::builder()
        .route("/admin/dashboard", "admin.dashboard", "Dashboard")
        .route("/admin/users", "admin.users", "ListUsers")
        .route("/admin/users/{id}", "admin.users.show", "ShowUser")
        .route("/admin/settings", "admin.settings", "UpdateSetting")
        .build()
        .unwrap()
}

fn router_at(path: &str) -> Router<&'static str, MemoryHistory> {
    Router::new(table(), MemoryHistory::new(path))
}

#[test]
fn test_initial_location_is_resolved() {
    let router = router_at("/admin/dashboard");

    assert_eq!(router.current().name(), Some("admin.dashboard"));
    assert_eq!(router.current_component(), Some(&"Dashboard"));
}

#[test]
fn test_initial_unknown_location_is_not_found() {
    let router = router_at("/login");

    assert_eq!(
        router.current(),
        &RouteState::NotFound {
            path: "/login".to_owned()
        }
    );
    assert_eq!(router.current_component(), None);
}

#[test]
fn test_navigate_by_path_pushes_history() {
    let mut router = router_at("/admin/dashboard");

    let matched = router.navigate("/admin/users").unwrap();

    assert_eq!(matched.name, "admin.users");
    assert_eq!(router.current_component(), Some(&"ListUsers"));
    assert_eq!(
        router.history().entries(),
        ["/admin/dashboard", "/admin/users"]
    );
}

#[test]
fn test_navigate_by_name_matches_navigate_by_path() {
    let mut by_path = router_at("/admin/dashboard");
    let mut by_name = router_at("/admin/dashboard");

    by_path.navigate("/admin/settings").unwrap();
    by_name.navigate(Location::named("admin.settings")).unwrap();

    assert_eq!(by_path.current(), by_name.current());
    assert_eq!(by_path.current_component(), by_name.current_component());
    assert_eq!(by_name.history().current_path().unwrap(), "/admin/settings");
}

#[test]
fn test_navigate_by_name_with_params() {
    let mut router = router_at("/admin/users");

    let matched = router
        .navigate(Location::named("admin.users.show").param("id", "9"))
        .unwrap();

    assert_eq!(matched.path, "/admin/users/9");
    assert_eq!(matched.params.get("id").map(String::as_str), Some("9"));
    assert_eq!(router.history().current_path().unwrap(), "/admin/users/9");
}

#[test]
fn test_navigate_to_unknown_path_renders_nothing() {
    let mut router = router_at("/admin/users");

    let err = router.navigate("/admin/unknown").unwrap_err();

    assert_eq!(
        err,
        NavigationError::NoMatch {
            path: "/admin/unknown".to_owned()
        }
    );
    assert_eq!(router.current_component(), None);
    assert_eq!(router.history().current_path().unwrap(), "/admin/unknown");
}

#[test]
fn test_navigate_to_unknown_name_is_rejected() {
    let mut router = router_at("/admin/users");

    let err = router.navigate(Location::named("admin.unknown")).unwrap_err();

    assert!(matches!(err, NavigationError::UnknownName { .. }));
    assert_eq!(router.current().name(), Some("admin.users"));
    assert_eq!(router.history().entries(), ["/admin/users"]);
}

#[test]
fn test_navigate_to_current_location_is_a_no_op() {
    let mut router = router_at("/admin/users");

    router.navigate("/admin/users").unwrap();
    router.navigate(Location::named("admin.users")).unwrap();

    assert_eq!(router.history().entries().len(), 1);
}

#[test]
fn test_navigate_twice_to_unknown_path_pushes_once() {
    let mut router = router_at("/admin/users");

    router.navigate("/admin/unknown").unwrap_err();
    let err = router.navigate("/admin/unknown").unwrap_err();

    assert!(matches!(err, NavigationError::NoMatch { .. }));
    assert_eq!(router.history().entries(), ["/admin/users", "/admin/unknown"]);
    assert!(router.current().matched().is_none());
}

#[test]
fn test_navigate_dropping_the_query_writes_history() {
    let mut router = router_at("/admin/users?page=2");

    router.navigate("/admin/users").unwrap();

    assert_eq!(
        router.history().entries(),
        ["/admin/users?page=2", "/admin/users"]
    );
    assert_eq!(router.history().current_path().unwrap(), "/admin/users");
    assert_eq!(router.current().name(), Some("admin.users"));
}

#[test]
fn test_is_active_ignores_unrelated_one_segment_routes() {
    let table = RouteTable::builder()
        .route("/home", "home", "Home")
        .route("/users", "users", "Users")
        .build()
        .unwrap();
    let router = Router::new(table, MemoryHistory::new("/home"));

    assert!(router.is_active("home"));
    assert!(!router.is_active("users"));
}

#[test]
fn test_replace_overwrites_the_current_entry() {
    let mut router = router_at("/admin/dashboard");

    router.replace("/admin/settings").unwrap();

    assert_eq!(router.history().entries(), ["/admin/settings"]);
    assert_eq!(router.current().name(), Some("admin.settings"));
}

#[test]
fn test_sync_follows_back_and_forward() {
    let mut router = router_at("/admin/dashboard");
    router.navigate("/admin/users").unwrap();
    router.navigate("/admin/unknown").unwrap_err();

    router.history_mut().back();
    assert_eq!(router.sync().name(), Some("admin.users"));

    router.history_mut().back();
    assert_eq!(router.sync().name(), Some("admin.dashboard"));

    router.history_mut().forward();
    router.history_mut().forward();
    assert!(router.sync().matched().is_none());
}

#[test]
fn test_is_active() {
    let router = router_at("/admin/users/4");

    assert!(router.is_active("admin.users.show"));
    assert!(router.is_active("admin.users"));
    assert!(!router.is_active("admin.dashboard"));
    assert!(!router.is_active("admin.settings"));
    assert!(!router.is_active("admin.nope"));
}

#[test]
fn test_href() {
    let router = router_at("/admin/dashboard");

    assert_eq!(
        router.href("admin.settings", &Default::default()).unwrap(),
        "/admin/settings"
    );
}

//! Integration tests for virgule-router
//!
//! Tests are organized by feature area and cover:
//! - Basic matching (static, dynamic parameters)
//! - Nested route trees and payload chains
//! - Match precedence (static > parameter > catch-all)
//! - The `*` fallback route
//! - Path normalization and case sensitivity

use pretty_assertions::assert_eq;
use virgule_router::{RouteDef, Router, RouterConfig};

fn app_router() -> Router<&'static str> {
    Router::from_routes(vec![
        RouteDef::new("/", "landing"),
        RouteDef::new("/auth/register", "register"),
        RouteDef::new("/auth/login", "login"),
        RouteDef::new("/app", "app-shell")
            .child(RouteDef::new("", "dashboard"))
            .child(RouteDef::new("discussions", "discussions"))
            .child(RouteDef::new("discussions/:discussion_id", "discussion"))
            .child(RouteDef::new("users", "users"))
            .child(RouteDef::new("profile", "profile")),
        RouteDef::new("*", "not-found"),
    ])
}

#[test]
fn test_match_static_route() {
    let router = app_router();
    let m = router.match_path("/auth/login").unwrap();
    assert_eq!(m.chain, vec![&"login"]);
    assert_eq!(m.pattern, "/auth/login");
    assert!(m.params.is_empty());
}

#[test]
fn test_match_root() {
    let router = app_router();
    let m = router.match_path("/").unwrap();
    assert_eq!(m.chain, vec![&"landing"]);
}

#[test]
fn test_index_child_matches_parent_path() {
    let router = app_router();
    let m = router.match_path("/app").unwrap();
    assert_eq!(m.chain, vec![&"app-shell", &"dashboard"]);
    assert_eq!(m.pattern, "/app");
}

#[test]
fn test_nested_child_chain_includes_shell() {
    let router = app_router();
    let m = router.match_path("/app/users").unwrap();
    assert_eq!(m.chain, vec![&"app-shell", &"users"]);
}

#[test]
fn test_param_extraction_in_nested_route() {
    let router = app_router();
    let m = router.match_path("/app/discussions/42").unwrap();
    assert_eq!(m.chain, vec![&"app-shell", &"discussion"]);
    assert_eq!(m.params.get("discussion_id"), Some(&"42".to_string()));
}

#[test]
fn test_static_outranks_param() {
    // "discussions" is both a static leaf and the prefix of a dynamic one;
    // the static leaf must win for its exact path.
    let router = app_router();
    let m = router.match_path("/app/discussions").unwrap();
    assert_eq!(m.chain, vec![&"app-shell", &"discussions"]);
}

#[test]
fn test_static_outranks_param_regardless_of_registration_order() {
    let router = Router::from_routes(vec![
        RouteDef::new("/users/:id", "dynamic"),
        RouteDef::new("/users/me", "static"),
    ]);
    let m = router.match_path("/users/me").unwrap();
    assert_eq!(m.chain, vec![&"static"]);
}

#[test]
fn test_positional_catch_all_sorts_last() {
    let router = Router::from_routes(vec![
        RouteDef::new("/docs/*rest", "docs-splat"),
        RouteDef::new("/docs/intro", "intro"),
    ]);
    assert_eq!(router.match_path("/docs/intro").unwrap().chain, vec![&"intro"]);

    let m = router.match_path("/docs/guide/install").unwrap();
    assert_eq!(m.chain, vec![&"docs-splat"]);
    assert_eq!(m.params.get("rest"), Some(&"guide/install".to_string()));
}

#[test]
fn test_unmatched_path_resolves_to_fallback() {
    let router = app_router();
    let m = router.match_path("/definitely/not/registered").unwrap();
    assert_eq!(m.chain, vec![&"not-found"]);
    assert_eq!(m.pattern, "*");
    assert_eq!(
        m.params.get("splat"),
        Some(&"definitely/not/registered".to_string())
    );
}

#[test]
fn test_no_fallback_means_no_match() {
    let router = Router::from_routes(vec![RouteDef::new("/", "landing")]);
    assert!(router.match_path("/missing").is_none());
}

#[test]
fn test_fallback_accessor() {
    let router = app_router();
    assert_eq!(router.fallback(), Some(&"not-found"));

    let bare: Router<&str> = Router::from_routes(vec![RouteDef::new("/", "landing")]);
    assert_eq!(bare.fallback(), None);
}

#[test]
fn test_sloppy_paths_are_normalized_before_matching() {
    let router = app_router();
    assert_eq!(
        router.match_path("/app/users/").unwrap().chain,
        vec![&"app-shell", &"users"]
    );
    assert_eq!(
        router.match_path("app//users").unwrap().chain,
        vec![&"app-shell", &"users"]
    );
}

#[test]
fn test_case_sensitivity_is_configurable() {
    let defs = || vec![RouteDef::new("/auth/login", "login"), RouteDef::new("*", "nf")];

    let sensitive = Router::from_routes(defs());
    assert_eq!(sensitive.match_path("/Auth/Login").unwrap().chain, vec![&"nf"]);

    let insensitive = Router::with_config(
        defs(),
        RouterConfig {
            case_insensitive: true,
        },
    );
    assert_eq!(
        insensitive.match_path("/Auth/Login").unwrap().chain,
        vec![&"login"]
    );
}

#[test]
fn test_patterns_lists_all_routes_excluding_fallback() {
    let router = app_router();
    let mut patterns: Vec<&str> = router.patterns().collect();
    patterns.sort_unstable();
    assert_eq!(
        patterns,
        vec![
            "/",
            "/app",
            "/app/discussions",
            "/app/discussions/:discussion_id",
            "/app/profile",
            "/app/users",
            "/auth/login",
            "/auth/register",
        ]
    );
    assert_eq!(router.len(), 8);
}

#[test]
fn test_empty_router() {
    let router: Router<&str> = Router::default();
    assert!(router.is_empty());
    assert!(router.match_path("/").is_none());
}

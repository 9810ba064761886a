// File: src/paths.rs
// Purpose: Static table of logical route names to URL patterns

use once_cell::sync::Lazy;

/// Authentication route patterns
pub struct AuthPaths {
    pub register: &'static str,
    pub login: &'static str,
}

/// Patterns inside the protected application subtree
///
/// `root` is absolute; the rest are relative to it. `dashboard` is the index
/// route and matches the root path itself.
pub struct AppPaths {
    pub root: &'static str,
    pub dashboard: &'static str,
    pub discussions: &'static str,
    pub discussion: &'static str,
    pub users: &'static str,
    pub profile: &'static str,
}

impl AppPaths {
    /// Absolute path of a single discussion
    pub fn discussion_path(&self, discussion_id: &str) -> String {
        format!("{}/discussions/{discussion_id}", self.root)
    }
}

/// The application's path table
///
/// Created once, never mutated, shared read-only across the process. Both the
/// router builder and navigation call sites consume it, so a pattern only
/// ever changes in one place.
pub struct Paths {
    pub home: &'static str,
    pub auth: AuthPaths,
    pub app: AppPaths,
    /// Matches any otherwise-unmatched route
    pub not_found: &'static str,
}

pub static PATHS: Paths = Paths {
    home: "/",
    auth: AuthPaths {
        register: "/auth/register",
        login: "/auth/login",
    },
    app: AppPaths {
        root: "/app",
        dashboard: "",
        discussions: "discussions",
        discussion: "discussions/:discussion_id",
        users: "users",
        profile: "profile",
    },
    not_found: "*",
};

/// Every absolute pattern a visitor can navigate to, in table order
///
/// Joined from the nested table at first use; handy for navigation menus and
/// for exhaustive route checks.
pub static NAVIGABLE_PATTERNS: Lazy<Vec<String>> = Lazy::new(|| {
    let app = &PATHS.app;
    vec![
        PATHS.home.to_string(),
        PATHS.auth.register.to_string(),
        PATHS.auth.login.to_string(),
        app.root.to_string(),
        format!("{}/{}", app.root, app.discussions),
        format!("{}/{}", app.root, app.discussion),
        format!("{}/{}", app.root, app.users),
        format!("{}/{}", app.root, app.profile),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discussion_path_substitutes_id() {
        assert_eq!(PATHS.app.discussion_path("42"), "/app/discussions/42");
    }

    #[test]
    fn test_navigable_patterns_cover_the_table() {
        assert_eq!(NAVIGABLE_PATTERNS.len(), 8);
        assert!(NAVIGABLE_PATTERNS.contains(&"/app/discussions/:discussion_id".to_string()));
    }
}

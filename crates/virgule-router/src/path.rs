//! Path utilities for validation and normalization
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use virgule_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/discussions"));
/// assert!(is_valid_path("/app/discussions/42"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("app")); // Missing leading /
/// assert!(!is_valid_path("/app/")); // Trailing /
/// assert!(!is_valid_path("/app//users")); // Double //
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }

    if !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    if path == "/" {
        return true;
    }

    !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Zero-copy via `Cow::Borrowed` when the input is already valid; a single
/// allocation rebuilds the path otherwise.
///
/// Handles common caller mistakes:
/// - Trailing slashes: `/path/` → `/path`
/// - Double slashes: `/path//to` → `/path/to`
/// - Backslashes: `\path\to` → `/path/to`
/// - Missing leading slash: `path/to` → `/path/to`
///
/// # Examples
///
/// ```
/// use virgule_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/app");
/// assert!(matches!(path, Cow::Borrowed("/app")));
///
/// assert_eq!(normalize_path("/app/"), "/app");
/// assert_eq!(normalize_path("app//users/"), "/app/users");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{normalized}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_paths() {
        assert!(is_valid_path("/"));
        assert!(is_valid_path("/auth/login"));
        assert!(!is_valid_path("auth/login"));
        assert!(!is_valid_path("/auth/login/"));
        assert!(!is_valid_path("/auth//login"));
        assert!(!is_valid_path(""));
    }

    #[test]
    fn test_normalize_is_zero_copy_for_valid_input() {
        assert!(matches!(normalize_path("/app/users"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_rebuilds_sloppy_input() {
        assert_eq!(normalize_path("/app/users/"), "/app/users");
        assert_eq!(normalize_path("\\app\\users"), "/app/users");
        assert_eq!(normalize_path("///"), "/");
    }
}

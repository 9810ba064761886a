//! Nested route definitions
//!
//! A [`RouteDef`] is one node of a route tree: a URL pattern (relative to its
//! parent), an arbitrary payload, and an optional list of children. The tree
//! mirrors nested UI layout: matching a child yields the chain of payloads
//! from the root down, so parent payloads can wrap the child's output.
//!
//! Route definitions use the immutable builder style: methods consume `self`
//! and return a new value, so trees read as a single expression.

/// One node of a route tree
///
/// # Examples
///
/// ```
/// use virgule_router::RouteDef;
///
/// let app = RouteDef::new("/app", "shell")
///     .child(RouteDef::new("", "dashboard")) // index route: matches /app itself
///     .child(RouteDef::new("discussions", "discussions"))
///     .child(RouteDef::new("discussions/:discussion_id", "discussion"));
/// assert_eq!(app.pattern(), "/app");
/// ```
#[derive(Debug, Clone)]
pub struct RouteDef<T> {
    pattern: String,
    payload: T,
    children: Vec<RouteDef<T>>,
}

impl<T> RouteDef<T> {
    /// Creates a route definition with no children
    ///
    /// Top-level patterns are absolute (`/auth/login`) or the catch-all `*`;
    /// child patterns are relative to their parent. The empty pattern `""`
    /// marks an index route that matches the parent path exactly.
    pub fn new(pattern: impl Into<String>, payload: T) -> Self {
        Self {
            pattern: pattern.into(),
            payload,
            children: Vec::new(),
        }
    }

    /// Adds a child route (functional builder)
    pub fn child(mut self, child: RouteDef<T>) -> Self {
        self.children.push(child);
        self
    }

    /// Adds multiple children at once (functional batch operation)
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = RouteDef<T>>,
    {
        self.children.extend(children);
        self
    }

    /// The pattern of this node, relative to its parent
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Borrows this node's payload
    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub(crate) fn into_parts(self) -> (String, T, Vec<RouteDef<T>>) {
        (self.pattern, self.payload, self.children)
    }
}

/// Joins a parent pattern with a relative child pattern
///
/// An empty child pattern yields the parent pattern unchanged (index route).
/// A leading `/` on the child is tolerated and stripped.
pub(crate) fn join_patterns(parent: &str, child: &str) -> String {
    let child = child.trim_start_matches('/');
    if child.is_empty() {
        return if parent.is_empty() {
            "/".to_string()
        } else {
            parent.to_string()
        };
    }
    match parent {
        "" | "/" => format!("/{child}"),
        _ => format!("{parent}/{child}"),
    }
}

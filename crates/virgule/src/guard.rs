// File: src/guard.rs
// Purpose: Seam for externally-owned route guards

use maud::Markup;

/// What a guard decided for the current navigation
pub enum GuardDecision {
    /// Render the protected subtree
    Allow,
    /// Send the visitor elsewhere (typically a login page)
    Redirect(String),
    /// Render an alternative view in place of the protected subtree
    Render(Markup),
}

/// A wrapper deciding whether a protected subtree may render
///
/// The decision logic (session checks, token validation, ...) is owned by the
/// application; the routing layer only applies the outcome. A `Redirect` or
/// `Render` decision short-circuits navigation before any protected child
/// module is resolved or rendered.
pub trait RouteGuard: Send + Sync {
    fn decide(&self) -> GuardDecision;
}

/// Guard that always allows; useful as a default and in tests
pub struct AllowAll;

impl RouteGuard for AllowAll {
    fn decide(&self) -> GuardDecision {
        GuardDecision::Allow
    }
}

// File: src/element.rs
// Purpose: Per-route content - an eager shell element or a lazy module thunk

use crate::client::QueryClient;
use crate::convert::{bind_module, RouteBinding};
use crate::guard::RouteGuard;
use crate::module::{BoxFuture, PageModule, PageProps};
use anyhow::Result;
use maud::Markup;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Renders a shell around an already-rendered child view
pub type Shell = Arc<dyn Fn(&PageProps, Markup) -> Markup + Send + Sync>;

/// Renders a resolution failure inside the nearest enclosing shell
pub type ErrorView = Arc<dyn Fn(&anyhow::Error) -> Markup + Send + Sync>;

/// Thunk that asynchronously resolves a page module
///
/// Stands in for a dynamic module import: nothing is fetched until the thunk
/// runs, and the thunk only runs when its route is first navigated to.
pub type ModuleThunk = Box<dyn Fn() -> BoxFuture<Result<PageModule>> + Send + Sync>;

/// An eagerly-available route element
///
/// Used for shells that must exist before any child module resolves: the
/// guarded application root wraps its children, optionally gates them behind
/// a [`RouteGuard`], and optionally owns the error view for failures in its
/// subtree.
pub struct Element {
    pub(crate) shell: Shell,
    pub(crate) guard: Option<Arc<dyn RouteGuard>>,
    pub(crate) error_view: Option<ErrorView>,
}

impl Element {
    /// Creates a shell element that wraps its children's output
    pub fn new<S>(shell: S) -> Self
    where
        S: Fn(&PageProps, Markup) -> Markup + Send + Sync + 'static,
    {
        Self {
            shell: Arc::new(shell),
            guard: None,
            error_view: None,
        }
    }

    /// Gates this element's subtree behind a guard (functional builder)
    pub fn with_guard(mut self, guard: Arc<dyn RouteGuard>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Owns failures in this element's subtree (functional builder)
    pub fn with_error_view<E>(mut self, error_view: E) -> Self
    where
        E: Fn(&anyhow::Error) -> Markup + Send + Sync + 'static,
    {
        self.error_view = Some(Arc::new(error_view));
        self
    }
}

/// A lazily-resolved page module, loaded at most once
///
/// The first navigation to the route runs the thunk and binds the resolved
/// module to the shared client; every later navigation reuses that binding.
/// A failed resolution leaves the cell empty, so the next navigation retries.
pub struct LazyModule {
    thunk: ModuleThunk,
    resolved: OnceCell<RouteBinding>,
}

impl LazyModule {
    /// Wraps an async module thunk
    pub fn new<F>(thunk: F) -> Self
    where
        F: Fn() -> BoxFuture<Result<PageModule>> + Send + Sync + 'static,
    {
        Self {
            thunk: Box::new(thunk),
            resolved: OnceCell::new(),
        }
    }

    /// Wraps a plain module constructor
    ///
    /// Most routes resolve synchronously in-process; this keeps their
    /// definitions free of future boilerplate while preserving the lazy,
    /// once-only contract.
    pub fn from_fn(f: fn() -> PageModule) -> Self {
        Self::new(move || Box::pin(async move { Ok(f()) }))
    }

    /// Resolves the module (first call only) and returns the client-bound
    /// route binding
    pub async fn binding(&self, client: &QueryClient) -> Result<&RouteBinding> {
        self.resolved
            .get_or_try_init(|| async {
                let module = (self.thunk)().await?;
                Ok(bind_module(module, client))
            })
            .await
    }

    /// True once the module has been resolved and bound
    pub fn is_resolved(&self) -> bool {
        self.resolved.initialized()
    }
}

/// The content behind one route: eagerly available or resolved on demand
///
/// An explicit sum type, so "thing to render now" and "thing to load later"
/// cannot be confused at a call site.
pub enum RouteContent {
    /// An eagerly-available element (shells, guards)
    Element(Element),
    /// A module fetched on first navigation
    Lazy(LazyModule),
}

impl RouteContent {
    /// Shorthand for a lazy route over a plain module constructor
    pub fn lazy(f: fn() -> PageModule) -> Self {
        RouteContent::Lazy(LazyModule::from_fn(f))
    }
}

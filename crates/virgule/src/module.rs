// File: src/module.rs
// Purpose: The shape of a lazily-loaded page module and its hook types

use crate::client::QueryClient;
use anyhow::Result;
use maud::Markup;
use serde_json::{Map, Value};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use virgule_router::Params;

/// Boxed future used by loaders, actions and module thunks
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Arguments given to a loader before its route renders
#[derive(Debug, Clone, Default)]
pub struct LoaderArgs {
    /// Parameters extracted from the matched path
    pub params: Params,
}

/// Arguments given to an action on a state-changing submission
#[derive(Debug, Clone, Default)]
pub struct ActionArgs {
    /// Parameters extracted from the matched path
    pub params: Params,
    /// The submitted payload
    pub input: Value,
}

/// Props given to a page component when it renders
#[derive(Debug, Clone, Default)]
pub struct PageProps {
    /// Parameters extracted from the matched path
    pub params: Params,
    /// Data produced by the route's loader, if it has one
    pub data: Option<Value>,
}

/// A bound per-route data loader
pub type Loader = Arc<dyn Fn(LoaderArgs) -> BoxFuture<Result<Value>> + Send + Sync>;

/// A bound per-route mutation handler
pub type Action = Arc<dyn Fn(ActionArgs) -> BoxFuture<Result<Value>> + Send + Sync>;

/// A renderable page component
pub type Component = Arc<dyn Fn(&PageProps) -> Markup + Send + Sync>;

/// Pre-render data hook: given the shared client, produces the route's loader
pub type LoaderHook = Box<dyn FnOnce(QueryClient) -> Loader + Send>;

/// Mutation hook: given the shared client, produces the route's action
pub type ActionHook = Box<dyn FnOnce(QueryClient) -> Action + Send>;

/// Wraps an async closure into a [`Loader`]
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use virgule::module::loader;
///
/// let l = loader(|_args| async move { Ok(json!({"ready": true})) });
/// drop(l);
/// ```
pub fn loader<F, Fut>(f: F) -> Loader
where
    F: Fn(LoaderArgs) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value>> + Send + 'static,
{
    Arc::new(move |args| Box::pin(f(args)))
}

/// Wraps an async closure into an [`Action`]
pub fn action<F, Fut>(f: F) -> Action
where
    F: Fn(ActionArgs) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value>> + Send + 'static,
{
    Arc::new(move |args| Box::pin(f(args)))
}

/// The resolved shape of a lazily-loaded page module
///
/// Every module exposes a renderable component. The pre-render data hook and
/// the mutation hook are optional; when present they are invoked exactly once
/// with the shared client at binding time (see [`crate::convert::bind_module`]).
/// Any additional fields the module carries are passed through untouched in
/// `extra`.
pub struct PageModule {
    pub(crate) component: Component,
    pub(crate) loader: Option<LoaderHook>,
    pub(crate) action: Option<ActionHook>,
    pub(crate) extra: Map<String, Value>,
}

impl PageModule {
    /// Creates a module from its renderable component
    pub fn new<C>(component: C) -> Self
    where
        C: Fn(&PageProps) -> Markup + Send + Sync + 'static,
    {
        Self {
            component: Arc::new(component),
            loader: None,
            action: None,
            extra: Map::new(),
        }
    }

    /// Attaches the pre-render data hook (functional builder)
    pub fn with_loader<H>(mut self, hook: H) -> Self
    where
        H: FnOnce(QueryClient) -> Loader + Send + 'static,
    {
        self.loader = Some(Box::new(hook));
        self
    }

    /// Attaches the mutation hook (functional builder)
    pub fn with_action<H>(mut self, hook: H) -> Self
    where
        H: FnOnce(QueryClient) -> Action + Send + 'static,
    {
        self.action = Some(Box::new(hook));
        self
    }

    /// Adds a passthrough field (functional builder)
    ///
    /// Passthrough fields carry module metadata (titles, cache hints, ...)
    /// that this layer does not interpret.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// True if the module exposes a pre-render data hook
    pub fn has_loader(&self) -> bool {
        self.loader.is_some()
    }

    /// True if the module exposes a mutation hook
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }
}

impl std::fmt::Debug for PageModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageModule")
            .field("has_loader", &self.loader.is_some())
            .field("has_action", &self.action.is_some())
            .field("extra", &self.extra)
            .finish()
    }
}

// File: src/convert.rs
// Purpose: Adapts a resolved page module into a client-bound route binding

use crate::client::QueryClient;
use crate::module::{Action, Component, Loader, PageModule};
use serde_json::{Map, Value};

/// A page module normalized into the shape the routing layer consumes
///
/// Passthrough fields live in their own map, so a module field named
/// `loader`, `action` or `component` can never shadow the bound hooks.
pub struct RouteBinding {
    /// The loader produced by the module's pre-render hook, if any
    pub loader: Option<Loader>,
    /// The action produced by the module's mutation hook, if any
    pub action: Option<Action>,
    /// The module's renderable component
    pub component: Component,
    /// Module fields this layer does not interpret, carried unchanged
    pub extra: Map<String, Value>,
}

/// Binds a resolved module to the shared client (pure adapter)
///
/// Each optional hook is invoked exactly once with a clone of the shared
/// client handle; the component and passthrough fields are carried over
/// unchanged. No hook output is executed here.
///
/// # Examples
///
/// ```
/// use maud::html;
/// use virgule::convert::bind_module;
/// use virgule::module::PageModule;
/// # use serde_json::Value;
/// # use std::sync::Arc;
/// # use virgule::client::{QueryCache, QueryClient};
/// # struct Nop;
/// # impl QueryCache for Nop {
/// #     fn get(&self, _: &str) -> Option<Value> { None }
/// #     fn set(&self, _: &str, _: Value) {}
/// #     fn invalidate(&self, _: &str) {}
/// # }
///
/// let client = QueryClient::new(Arc::new(Nop));
/// let module = PageModule::new(|_| html! { p { "hi" } });
/// let binding = bind_module(module, &client);
/// assert!(binding.loader.is_none());
/// assert!(binding.action.is_none());
/// ```
pub fn bind_module(module: PageModule, client: &QueryClient) -> RouteBinding {
    RouteBinding {
        loader: module.loader.map(|hook| hook(client.clone())),
        action: module.action.map(|hook| hook(client.clone())),
        component: module.component,
        extra: module.extra,
    }
}

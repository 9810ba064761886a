// Virgule - lazy route-to-page composition for client-side applications
// Binds URL patterns to lazily-resolved page modules, threading one shared
// data-fetching client into every route's loader/action hooks.

pub mod client;
pub mod convert;
pub mod element;
pub mod guard;
pub mod module;
pub mod pages;
pub mod paths;
pub mod provider;
pub mod router;

// Re-export the handle and boundary types callers wire up
pub use client::{ClientId, QueryCache, QueryClient};

// Re-export the module shape and hook constructors
pub use module::{action, loader, Action, Loader, PageModule, PageProps};

// Re-export the composition surface
pub use convert::{bind_module, RouteBinding};
pub use element::{Element, LazyModule, RouteContent};
pub use guard::{GuardDecision, RouteGuard};
pub use provider::RouterProvider;
pub use router::{build_router, AppRouter, Navigation};

// Re-export the static path table
pub use paths::PATHS;

// Re-export the routing library and the renderable unit
pub use maud::{html, Markup};
pub use virgule_router::{Params, RouteDef, Router};

// File: src/provider.rs
// Purpose: Memoizes the built router by client identity

use crate::client::{ClientId, QueryClient};
use crate::guard::RouteGuard;
use crate::router::{build_router, AppRouter};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Hands out the application router, rebuilding only when the client changes
///
/// Construction is idempotent for a given client identity, and rebuilding
/// discards the lazily-resolved module cache, so callers hold one provider
/// and ask it for the router instead of calling [`build_router`] per
/// navigation.
pub struct RouterProvider {
    cached: Mutex<Option<(ClientId, Arc<AppRouter>)>>,
}

impl RouterProvider {
    pub fn new() -> Self {
        Self {
            cached: Mutex::new(None),
        }
    }

    /// Returns the memoized router for this client, building it on first use
    /// or when the client identity has changed since the last call
    pub fn router_for(&self, client: &QueryClient, guard: Arc<dyn RouteGuard>) -> Arc<AppRouter> {
        let mut cached = self
            .cached
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match cached.as_ref() {
            Some((id, router)) if *id == client.identity() => router.clone(),
            _ => {
                debug!(client = ?client.identity(), "rebuilding router for new client identity");
                let router = Arc::new(build_router(client, guard));
                *cached = Some((client.identity(), router.clone()));
                router
            }
        }
    }
}

impl Default for RouterProvider {
    fn default() -> Self {
        Self::new()
    }
}

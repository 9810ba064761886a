// File: src/router.rs
// Purpose: Builds the application route tree and resolves navigations

use crate::client::QueryClient;
use crate::element::{Element, LazyModule, RouteContent};
use crate::guard::{GuardDecision, RouteGuard};
use crate::module::{ActionArgs, LoaderArgs, PageProps};
use crate::pages;
use crate::paths::PATHS;
use anyhow::{anyhow, Context, Result};
use maud::{html, Markup};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};
use virgule_router::{Params, RouteDef, Router};

/// Outcome of resolving one navigation
pub enum Navigation {
    /// The matched route rendered inside its shell chain
    Rendered {
        view: Markup,
        /// The absolute pattern that matched (`*` for the fallback)
        pattern: String,
        params: Params,
    },
    /// A guard sent the visitor elsewhere
    Redirected { location: String },
    /// A guard rendered an alternative in place of the protected subtree
    Blocked { view: Markup },
    /// Module load or loader execution failed; the nearest error view rendered
    Failed { view: Markup },
}

impl Navigation {
    /// The rendered HTML, for any outcome that produced a view
    pub fn html(&self) -> Option<String> {
        match self {
            Navigation::Rendered { view, .. }
            | Navigation::Blocked { view }
            | Navigation::Failed { view } => Some(view.clone().into_string()),
            Navigation::Redirected { .. } => None,
        }
    }

    /// True for a successful render of the matched route
    pub fn is_rendered(&self) -> bool {
        matches!(self, Navigation::Rendered { .. })
    }
}

/// The application router: an immutable route tree bound to one shared client
///
/// Construction registers lazy bindings only; no module resolves and no hook
/// runs until a matching navigation. Rebuild only when the client identity
/// changes (see [`crate::provider::RouterProvider`]), so in-flight state is
/// not discarded needlessly.
pub struct AppRouter {
    routes: Router<RouteContent>,
    client: QueryClient,
}

impl AppRouter {
    /// Wraps an already-built route tree
    ///
    /// [`build_router`] covers the application table; tests and embedders can
    /// supply their own trees.
    pub fn new(routes: Router<RouteContent>, client: &QueryClient) -> Self {
        Self {
            routes,
            client: client.clone(),
        }
    }

    /// The client this router threads into every hook
    pub fn client(&self) -> &QueryClient {
        &self.client
    }

    /// Absolute patterns of all matchable routes, excluding the fallback
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.patterns()
    }

    /// Resolves a navigation to a path
    ///
    /// Walks the matched chain outside-in: guards short-circuit before any
    /// protected module resolves; the leaf module loads (first visit only)
    /// and binds to the shared client; its loader runs; the component renders
    /// inside the shell chain. Failures render the nearest error view instead
    /// of propagating, so navigation itself never errors.
    pub async fn navigate(&self, path: &str) -> Navigation {
        let Some(matched) = self.routes.match_path(path) else {
            warn!(path, "no route matched and no fallback is registered");
            let err = anyhow!("no route matches {path}");
            return Navigation::Failed {
                view: default_error_view(&err),
            };
        };
        debug!(path, pattern = matched.pattern, "navigating");

        let mut shells: Vec<&Element> = Vec::new();
        let mut leaf: Option<&LazyModule> = None;
        for content in matched.chain.iter().copied() {
            match content {
                RouteContent::Element(element) => {
                    if let Some(guard) = &element.guard {
                        match guard.decide() {
                            GuardDecision::Allow => {}
                            GuardDecision::Redirect(location) => {
                                info!(path, location, "guard redirected navigation");
                                return Navigation::Redirected { location };
                            }
                            GuardDecision::Render(view) => {
                                info!(path, "guard rendered an alternative view");
                                return Navigation::Blocked { view };
                            }
                        }
                    }
                    shells.push(element);
                }
                RouteContent::Lazy(lazy) => leaf = Some(lazy),
            }
        }

        let props = match leaf {
            Some(lazy) => {
                let binding = match lazy.binding(&self.client).await {
                    Ok(binding) => binding,
                    Err(err) => {
                        warn!(path, error = %err, "page module failed to load");
                        return Navigation::Failed {
                            view: error_view_for(&shells, &err),
                        };
                    }
                };

                let data = match &binding.loader {
                    Some(loader) => {
                        let args = LoaderArgs {
                            params: matched.params.clone(),
                        };
                        match loader(args).await {
                            Ok(value) => Some(value),
                            Err(err) => {
                                warn!(path, error = %err, "route loader failed");
                                return Navigation::Failed {
                                    view: error_view_for(&shells, &err),
                                };
                            }
                        }
                    }
                    None => None,
                };

                let props = PageProps {
                    params: matched.params.clone(),
                    data,
                };
                let view = (binding.component)(&props);
                return Navigation::Rendered {
                    view: wrap_in_shells(&shells, &props, view),
                    pattern: matched.pattern.to_string(),
                    params: matched.params,
                };
            }
            // A chain of bare shells with no leaf module renders empty.
            None => PageProps {
                params: matched.params.clone(),
                data: None,
            },
        };

        Navigation::Rendered {
            view: wrap_in_shells(&shells, &props, html! {}),
            pattern: matched.pattern.to_string(),
            params: matched.params,
        }
    }

    /// Runs the matched route's bound action with a submitted payload
    ///
    /// Unlike [`navigate`](Self::navigate), this is fallible: submitting to a
    /// route with no action, or past a denying guard, is a caller error.
    pub async fn resolve_action(&self, path: &str, input: Value) -> Result<Value> {
        let matched = self
            .routes
            .match_path(path)
            .with_context(|| format!("no route matches {path}"))?;

        for content in matched.chain.iter().copied() {
            if let RouteContent::Element(element) = content {
                if let Some(guard) = &element.guard {
                    if !matches!(guard.decide(), GuardDecision::Allow) {
                        warn!(path, "guard denied an action submission");
                        return Err(anyhow!("submission to {path} was blocked by a guard"));
                    }
                }
            }
        }

        let lazy = matched
            .chain
            .iter()
            .copied()
            .find_map(|content| match content {
                RouteContent::Lazy(lazy) => Some(lazy),
                RouteContent::Element(_) => None,
            })
            .ok_or_else(|| anyhow!("route {} has no submittable module", matched.pattern))?;

        let binding = lazy.binding(&self.client).await?;
        let action = binding
            .action
            .as_ref()
            .ok_or_else(|| anyhow!("route {} has no action", matched.pattern))?;

        action(ActionArgs {
            params: matched.params,
            input,
        })
        .await
    }
}

/// Builds the application router over the static path table
///
/// Every leaf is a lazy binding: the page module is fetched on the route's
/// first navigation and adapted to the shared client at that point. The
/// `/app` subtree sits behind the supplied guard, and the `*` fallback lazily
/// loads the not-found page. Construction has no side effects.
pub fn build_router(client: &QueryClient, guard: Arc<dyn RouteGuard>) -> AppRouter {
    let app = &PATHS.app;
    let routes = vec![
        RouteDef::new(PATHS.home, RouteContent::lazy(pages::landing::module)),
        RouteDef::new(
            PATHS.auth.register,
            RouteContent::lazy(pages::auth::register::module),
        ),
        RouteDef::new(
            PATHS.auth.login,
            RouteContent::lazy(pages::auth::login::module),
        ),
        RouteDef::new(
            app.root,
            RouteContent::Element(pages::app::root::shell(guard)),
        )
        .child(RouteDef::new(
            app.dashboard,
            RouteContent::lazy(pages::app::dashboard::module),
        ))
        .child(RouteDef::new(
            app.discussions,
            RouteContent::lazy(pages::app::discussions::module),
        ))
        .child(RouteDef::new(
            app.discussion,
            RouteContent::lazy(pages::app::discussion::module),
        ))
        .child(RouteDef::new(
            app.users,
            RouteContent::lazy(pages::app::users::module),
        ))
        .child(RouteDef::new(
            app.profile,
            RouteContent::lazy(pages::app::profile::module),
        )),
        RouteDef::new(PATHS.not_found, RouteContent::lazy(pages::not_found::module)),
    ];

    let router = Router::from_routes(routes);
    debug!(
        routes = router.len(),
        client = ?client.identity(),
        "built application router"
    );
    AppRouter::new(router, client)
}

fn wrap_in_shells(shells: &[&Element], props: &PageProps, view: Markup) -> Markup {
    shells
        .iter()
        .rev()
        .fold(view, |inner, shell| (shell.shell)(props, inner))
}

/// Picks the innermost error view owning the failed subtree
fn error_view_for(shells: &[&Element], err: &anyhow::Error) -> Markup {
    shells
        .iter()
        .rev()
        .find_map(|element| element.error_view.as_ref())
        .map(|error_view| error_view(err))
        .unwrap_or_else(|| default_error_view(err))
}

fn default_error_view(err: &anyhow::Error) -> Markup {
    html! {
        div.route-error {
            h2 { "Navigation failed" }
            p { (err) }
        }
    }
}

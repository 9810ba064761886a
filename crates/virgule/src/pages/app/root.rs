// File: src/pages/app/root.rs
// Purpose: Guarded shell around the application subtree

use crate::element::Element;
use crate::guard::RouteGuard;
use crate::module::PageProps;
use crate::paths::PATHS;
use maud::{html, Markup};
use std::sync::Arc;

/// The application shell: navigation chrome around whichever child route
/// matched. The guard decides whether the subtree may render at all; failures
/// anywhere below land in this shell's error view.
pub fn shell(guard: Arc<dyn RouteGuard>) -> Element {
    Element::new(render)
        .with_guard(guard)
        .with_error_view(render_error)
}

fn render(_props: &PageProps, inner: Markup) -> Markup {
    let app = &PATHS.app;
    html! {
        div.app-layout {
            nav {
                a href=(app.root) { "Dashboard" }
                a href={ (app.root) "/" (app.discussions) } { "Discussions" }
                a href={ (app.root) "/" (app.users) } { "Users" }
                a href={ (app.root) "/" (app.profile) } { "Profile" }
            }
            main { (inner) }
        }
    }
}

fn render_error(err: &anyhow::Error) -> Markup {
    html! {
        div.app-error {
            h2 { "Something went wrong" }
            p { (err) }
            a href=(PATHS.app.root) { "Back to the dashboard" }
        }
    }
}

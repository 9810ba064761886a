// File: src/pages/landing.rs
// Purpose: Public landing page

use crate::module::{PageModule, PageProps};
use crate::paths::PATHS;
use maud::{html, Markup};
use serde_json::json;

pub fn module() -> PageModule {
    PageModule::new(render).with_extra("title", json!("Welcome"))
}

fn render(_props: &PageProps) -> Markup {
    html! {
        section.landing {
            h1 { "Welcome" }
            p { "Follow the discussions your team cares about." }
            a href=(PATHS.auth.login) { "Sign in" }
            " or "
            a href=(PATHS.auth.register) { "create an account" }
        }
    }
}

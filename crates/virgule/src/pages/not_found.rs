// File: src/pages/not_found.rs
// Purpose: Catch-all page for unmatched routes

use crate::module::{PageModule, PageProps};
use crate::paths::PATHS;
use maud::{html, Markup};
use serde_json::json;

pub fn module() -> PageModule {
    PageModule::new(render).with_extra("title", json!("Not Found"))
}

fn render(props: &PageProps) -> Markup {
    html! {
        section.not-found {
            h1 { "Page not found" }
            @if let Some(missing) = props.params.get("splat") {
                p { "Nothing lives at " code { "/" (missing) } "." }
            }
            a href=(PATHS.home) { "Back home" }
        }
    }
}

// File: src/pages/app/dashboard.rs
// Purpose: Index page of the application subtree

use crate::client::QueryClient;
use crate::module::{loader, Loader, PageModule, PageProps};
use maud::{html, Markup};
use serde_json::{json, Value};

pub fn module() -> PageModule {
    PageModule::new(render)
        .with_loader(client_loader)
        .with_extra("title", json!("Dashboard"))
}

fn client_loader(client: QueryClient) -> Loader {
    loader(move |_args| {
        let client = client.clone();
        async move {
            Ok(json!({
                "user": client.get("auth-user").unwrap_or(Value::Null),
            }))
        }
    })
}

fn render(props: &PageProps) -> Markup {
    let name = props
        .data
        .as_ref()
        .and_then(|data| data.pointer("/user/name"))
        .and_then(Value::as_str)
        .unwrap_or("there");

    html! {
        section.dashboard {
            h1 { "Dashboard" }
            p { "Hello, " (name) "." }
        }
    }
}

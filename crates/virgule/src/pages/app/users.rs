// File: src/pages/app/users.rs
// Purpose: Team member directory

use crate::client::QueryClient;
use crate::module::{loader, Loader, PageModule, PageProps};
use maud::{html, Markup};
use serde_json::{json, Value};

pub fn module() -> PageModule {
    PageModule::new(render)
        .with_loader(client_loader)
        .with_extra("title", json!("Users"))
}

fn client_loader(client: QueryClient) -> Loader {
    loader(move |_args| {
        let client = client.clone();
        async move { Ok(client.get("users").unwrap_or_else(|| json!([]))) }
    })
}

fn render(props: &PageProps) -> Markup {
    let users = props
        .data
        .as_ref()
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    html! {
        section.users {
            h1 { "Users" }
            ul {
                @for user in &users {
                    li { (user.get("name").and_then(Value::as_str).unwrap_or("unknown")) }
                }
            }
        }
    }
}

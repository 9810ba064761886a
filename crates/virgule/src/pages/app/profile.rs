// File: src/pages/app/profile.rs
// Purpose: Current user's profile page

use crate::client::QueryClient;
use crate::module::{loader, Loader, PageModule, PageProps};
use maud::{html, Markup};
use serde_json::{json, Value};

pub fn module() -> PageModule {
    PageModule::new(render)
        .with_loader(client_loader)
        .with_extra("title", json!("Profile"))
}

fn client_loader(client: QueryClient) -> Loader {
    loader(move |_args| {
        let client = client.clone();
        async move { Ok(client.get("auth-user").unwrap_or(Value::Null)) }
    })
}

fn render(props: &PageProps) -> Markup {
    let user = props.data.clone().unwrap_or(Value::Null);
    let name = user.get("name").and_then(Value::as_str).unwrap_or("unknown");
    let email = user.get("email").and_then(Value::as_str).unwrap_or("-");

    html! {
        section.profile {
            h1 { "Profile" }
            dl {
                dt { "Name" }
                dd { (name) }
                dt { "Email" }
                dd { (email) }
            }
        }
    }
}

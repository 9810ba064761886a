// File: src/pages/app/discussion.rs
// Purpose: Single discussion page

use crate::client::QueryClient;
use crate::module::{loader, Loader, PageModule, PageProps};
use anyhow::{anyhow, Context};
use maud::{html, Markup};
use serde_json::{json, Value};

pub(crate) fn cache_key(discussion_id: &str) -> String {
    format!("discussion:{discussion_id}")
}

pub fn module() -> PageModule {
    PageModule::new(render)
        .with_loader(client_loader)
        .with_extra("title", json!("Discussion"))
}

fn client_loader(client: QueryClient) -> Loader {
    loader(move |args| {
        let client = client.clone();
        async move {
            let id = args
                .params
                .get("discussion_id")
                .context("route matched without a discussion_id parameter")?;
            client
                .get(&cache_key(id))
                .ok_or_else(|| anyhow!("discussion {id} is not available"))
        }
    })
}

fn render(props: &PageProps) -> Markup {
    let title = props
        .data
        .as_ref()
        .and_then(|data| data.get("title"))
        .and_then(Value::as_str)
        .unwrap_or("Discussion");
    let body = props
        .data
        .as_ref()
        .and_then(|data| data.get("body"))
        .and_then(Value::as_str)
        .unwrap_or("");

    html! {
        article.discussion {
            h1 { (title) }
            p { (body) }
        }
    }
}

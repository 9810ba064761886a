// File: src/pages/app/discussions.rs
// Purpose: Discussion list with a creation action

use crate::client::QueryClient;
use crate::module::{action, loader, Action, Loader, PageModule, PageProps};
use crate::paths::PATHS;
use anyhow::Context;
use maud::{html, Markup};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub(crate) const DISCUSSIONS_KEY: &str = "discussions";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Discussion {
    pub id: String,
    pub title: String,
}

pub fn module() -> PageModule {
    PageModule::new(render)
        .with_loader(client_loader)
        .with_action(client_action)
        .with_extra("title", json!("Discussions"))
}

fn client_loader(client: QueryClient) -> Loader {
    loader(move |_args| {
        let client = client.clone();
        async move { Ok(client.get(DISCUSSIONS_KEY).unwrap_or_else(|| json!([]))) }
    })
}

/// Appends a submitted discussion to the cached list and returns the new
/// list, so the caller can re-render without refetching.
fn client_action(client: QueryClient) -> Action {
    action(move |args| {
        let client = client.clone();
        async move {
            let submitted: Discussion =
                serde_json::from_value(args.input).context("malformed discussion submission")?;

            let mut discussions: Vec<Discussion> = client
                .get(DISCUSSIONS_KEY)
                .map(serde_json::from_value)
                .transpose()
                .context("cached discussion list is malformed")?
                .unwrap_or_default();
            discussions.push(submitted);

            let value = serde_json::to_value(&discussions)?;
            client.set(DISCUSSIONS_KEY, value.clone());
            Ok(value)
        }
    })
}

fn render(props: &PageProps) -> Markup {
    let discussions: Vec<Discussion> = props
        .data
        .clone()
        .and_then(|data| serde_json::from_value(data).ok())
        .unwrap_or_default();

    html! {
        section.discussions {
            h1 { "Discussions" }
            @if discussions.is_empty() {
                p { "No discussions yet." }
            } @else {
                ul {
                    @for discussion in &discussions {
                        li {
                            a href=(PATHS.app.discussion_path(&discussion.id)) {
                                (discussion.title)
                            }
                        }
                    }
                }
            }
        }
    }
}

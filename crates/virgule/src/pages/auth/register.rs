// File: src/pages/auth/register.rs
// Purpose: Account registration page

use crate::client::QueryClient;
use crate::module::{action, Action, PageModule, PageProps};
use crate::paths::PATHS;
use anyhow::Context;
use maud::{html, Markup};
use serde::{Deserialize, Serialize};
use serde_json::json;

const PENDING_KEY: &str = "pending-registration";

#[derive(Debug, Serialize, Deserialize)]
struct Registration {
    email: String,
    #[serde(default)]
    display_name: Option<String>,
}

pub fn module() -> PageModule {
    PageModule::new(render)
        .with_action(client_action)
        .with_extra("title", json!("Register"))
}

/// Records the submission for the externally-owned signup flow to pick up.
fn client_action(client: QueryClient) -> Action {
    action(move |args| {
        let client = client.clone();
        async move {
            let registration: Registration =
                serde_json::from_value(args.input).context("malformed registration submission")?;
            let value = serde_json::to_value(&registration)?;
            client.set(PENDING_KEY, value.clone());
            Ok(value)
        }
    })
}

fn render(_props: &PageProps) -> Markup {
    html! {
        section.auth {
            h1 { "Create an account" }
            form method="post" {
                label { "Email" input type="email" name="email"; }
                label { "Display name" input type="text" name="display_name"; }
                button type="submit" { "Register" }
            }
            p {
                "Already registered? "
                a href=(PATHS.auth.login) { "Sign in" }
            }
        }
    }
}

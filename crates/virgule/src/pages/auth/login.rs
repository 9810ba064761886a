// File: src/pages/auth/login.rs
// Purpose: Sign-in page

use crate::module::{PageModule, PageProps};
use crate::paths::PATHS;
use maud::{html, Markup};
use serde_json::json;

pub fn module() -> PageModule {
    PageModule::new(render).with_extra("title", json!("Sign in"))
}

fn render(_props: &PageProps) -> Markup {
    html! {
        section.auth {
            h1 { "Sign in" }
            form method="post" {
                label { "Email" input type="email" name="email"; }
                label { "Password" input type="password" name="password"; }
                button type="submit" { "Sign in" }
            }
            p {
                "No account yet? "
                a href=(PATHS.auth.register) { "Register" }
            }
        }
    }
}

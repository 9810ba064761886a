// File: src/pages/app/mod.rs
// Purpose: The protected application subtree

pub mod dashboard;
pub mod discussion;
pub mod discussions;
pub mod profile;
pub mod root;
pub mod users;

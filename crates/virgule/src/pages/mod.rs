// File: src/pages/mod.rs
// Purpose: Page modules, one per route in the path table

pub mod app;
pub mod auth;
pub mod landing;
pub mod not_found;

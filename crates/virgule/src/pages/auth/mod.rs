// File: src/pages/auth/mod.rs
// Purpose: Authentication pages (login, register)

pub mod login;
pub mod register;

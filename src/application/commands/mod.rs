// src/application/commands/mod.rs
pub mod comments;
pub mod posts;
pub mod tags;
pub mod users;

mod retry;
mod slugs;

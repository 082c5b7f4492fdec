// src/domain/mod.rs
pub mod comment;
pub mod errors;
pub mod pagination;
pub mod post;
pub mod slug;
pub mod tag;
pub mod user;

// src/domain/tag/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewTag, Tag, TagUpdate};
pub use repository::TagRepository;
pub use services::TagResolver;
pub use value_objects::{TagId, TagName};

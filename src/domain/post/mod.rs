pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate, distinct_tags, effective_published_at};
pub use repository::{PostFilter, PostReadRepository, PostWriteRepository};
pub use value_objects::{PostBody, PostId, PostStatus, PostTitle};

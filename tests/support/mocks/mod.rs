// tests/support/mocks/mod.rs
pub mod comment_repo;
pub mod post_repo;
pub mod security;
pub mod tag_repo;
pub mod time;
pub mod user_repo;
pub mod util;

pub use comment_repo::InMemoryComments;
pub use post_repo::InMemoryPosts;
pub use security::PlainPasswordHasher;
pub use tag_repo::InMemoryTags;
pub use time::fixed_now;
pub use user_repo::InMemoryUsers;
pub use util::DummyClock;

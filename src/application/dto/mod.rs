pub mod comments;
pub mod pagination;
pub mod posts;
pub mod tags;
pub mod users;

pub use comments::CommentDto;
pub use pagination::OffsetPage;
pub use posts::PostDto;
pub use tags::TagDto;
pub use users::UserDto;

mod get;
mod list;
mod service;

pub use get::GetCommentQuery;
pub use list::{ListCommentsByPostQuery, ListCommentsByUserQuery};
pub use service::CommentQueryService;

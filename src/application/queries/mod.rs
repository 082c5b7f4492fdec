pub mod comments;
pub mod posts;
pub mod tags;
pub mod users;

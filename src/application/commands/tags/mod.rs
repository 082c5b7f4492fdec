// src/application/commands/tags/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateTagCommand;
pub use delete::DeleteTagCommand;
pub use service::TagCommandService;
pub use update::UpdateTagCommand;

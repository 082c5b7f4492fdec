// src/presentation/http/controllers/mod.rs
pub mod comments;
pub mod posts;
pub mod tags;
pub mod users;

use serde::Deserialize;

/// `?limit=&offset=` shared by every paginated listing.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}

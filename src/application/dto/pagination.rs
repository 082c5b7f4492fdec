use crate::domain::pagination::PageRequest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct OffsetPage<T> {
    pub items: Vec<T>,
    pub limit: u32,
    pub offset: u32,
}

impl<T> OffsetPage<T> {
    pub fn new(items: Vec<T>, page: PageRequest) -> Self {
        Self {
            items,
            limit: page.limit,
            offset: page.offset,
        }
    }
}

use super::TagQueryService;
use crate::{
    application::{
        dto::{OffsetPage, TagDto},
        error::ApplicationResult,
    },
    domain::pagination::PageRequest,
};

#[derive(Debug, Clone, Default)]
pub struct ListTagsQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl TagQueryService {
    /// Ordered by name.
    pub async fn list_tags(&self, query: ListTagsQuery) -> ApplicationResult<OffsetPage<TagDto>> {
        let page = PageRequest::new(query.limit, query.offset);
        let tags = self.tag_repo.list_page(page).await?;
        Ok(OffsetPage::new(
            tags.into_iter().map(Into::into).collect(),
            page,
        ))
    }
}

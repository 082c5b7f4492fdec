use super::PostQueryService;
use crate::{
    application::{
        dto::{OffsetPage, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        pagination::PageRequest,
        post::{PostFilter, PostStatus},
        user::UserId,
    },
};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct ListPostsQuery {
    pub author_id: Option<Uuid>,
    pub status: Option<PostStatus>,
    /// Tag names or slugs; a post matches when it carries any of them.
    pub tags: Vec<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<OffsetPage<PostDto>> {
        let author_id = query.author_id.map(UserId::from);
        if let Some(author_id) = author_id {
            if self.user_repo.find_by_id(author_id).await?.is_none() {
                return Err(ApplicationError::not_found("author not found"));
            }
        }

        let page = PageRequest::new(query.limit, query.offset);
        let filter = PostFilter {
            author_id,
            status: query.status,
            tag_slugs: self.normalize_tag_filter(&query.tags),
            page,
        };

        let posts = self.read_repo.list_page(filter).await?;
        let items = posts.into_iter().map(Into::into).collect();
        Ok(OffsetPage::new(items, page))
    }

    fn normalize_tag_filter(&self, tags: &[String]) -> Vec<String> {
        let mut slugs: Vec<String> = tags
            .iter()
            .map(|tag| self.slugger.slugify(tag))
            .filter(|slug| !slug.is_empty())
            .collect();
        slugs.sort();
        slugs.dedup();
        slugs
    }
}

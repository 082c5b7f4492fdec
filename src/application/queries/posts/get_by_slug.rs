use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDto> {
        let slug = Slug::new(query.slug)?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        Ok(post.into())
    }
}

use super::TagQueryService;
use crate::{
    application::{
        dto::TagDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{slug::Slug, tag::TagId},
};

pub struct GetTagByIdQuery {
    pub id: i64,
}

pub struct GetTagBySlugQuery {
    pub slug: String,
}

impl TagQueryService {
    pub async fn get_tag_by_id(&self, query: GetTagByIdQuery) -> ApplicationResult<TagDto> {
        let id = TagId::new(query.id)?;
        let tag = self
            .tag_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        Ok(tag.into())
    }

    pub async fn get_tag_by_slug(&self, query: GetTagBySlugQuery) -> ApplicationResult<TagDto> {
        let slug = Slug::new(query.slug)?;
        let tag = self
            .tag_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        Ok(tag.into())
    }
}

// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            comments::CommentCommandService, posts::PostCommandService, tags::TagCommandService,
            users::UserCommandService,
        },
        ports::{security::PasswordHasher, time::Clock, util::SlugGenerator},
        queries::{
            comments::CommentQueryService, posts::PostQueryService, tags::TagQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        comment::CommentRepository,
        post::{PostReadRepository, PostWriteRepository},
        slug::UniqueSlugService,
        tag::{TagRepository, TagResolver},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub tag_commands: Arc<TagCommandService>,
    pub tag_queries: Arc<TagQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(UniqueSlugService::new(Arc::clone(&slugger)));
        let tag_resolver = Arc::new(TagResolver::new(
            Arc::clone(&tag_repo),
            Arc::clone(&slug_service),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&user_repo),
            Arc::clone(&slug_service),
            Arc::clone(&tag_resolver),
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&user_repo),
            Arc::clone(&slugger),
        ));

        let tag_commands = Arc::new(TagCommandService::new(
            Arc::clone(&tag_repo),
            Arc::clone(&slug_service),
        ));
        let tag_queries = Arc::new(TagQueryService::new(Arc::clone(&tag_repo)));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            comment_repo,
            post_read_repo,
            user_repo,
        ));

        Self {
            user_commands,
            user_queries,
            post_commands,
            post_queries,
            tag_commands,
            tag_queries,
            comment_commands,
            comment_queries,
        }
    }
}

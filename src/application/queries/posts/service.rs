use std::sync::Arc;

use crate::{
    application::ports::util::SlugGenerator,
    domain::{post::PostReadRepository, user::UserRepository},
};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
}

impl PostQueryService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            user_repo,
            slugger,
        }
    }
}

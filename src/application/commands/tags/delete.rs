// src/application/commands/tags/delete.rs
use super::TagCommandService;
use crate::{application::error::ApplicationResult, domain::tag::TagId};

pub struct DeleteTagCommand {
    pub id: i64,
}

impl TagCommandService {
    /// Detaches the tag from every post before removing it.
    pub async fn delete_tag(&self, command: DeleteTagCommand) -> ApplicationResult<()> {
        let id = TagId::new(command.id)?;
        let tag = self.load(id).await?;

        self.tag_repo.delete(id).await?;
        tracing::info!(tag_id = id.0, name = %tag.name, "deleted tag");
        Ok(())
    }
}

// src/application/commands/retry.rs
use std::future::Future;

use crate::application::error::ApplicationResult;

/// Attempts per write before a unique-key conflict is reported to the caller.
pub(crate) const MAX_WRITE_ATTEMPTS: u32 = 3;

/// Runs `attempt` again when the store rejects it with a unique-key conflict.
/// Each attempt must recompute its generated keys (slugs, tag rows) so a
/// retry observes whatever the competing writer committed.
pub(crate) async fn retry_on_conflict<T, F, Fut>(operation: &'static str, mut attempt: F) -> ApplicationResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ApplicationResult<T>>,
{
    let mut tries = 1;
    loop {
        match attempt().await {
            Err(err) if err.is_storage_conflict() && tries < MAX_WRITE_ATTEMPTS => {
                tracing::warn!(operation, attempt = tries, error = %err, "write conflict, retrying");
                tries += 1;
            }
            result => return result,
        }
    }
}

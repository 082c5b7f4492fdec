// tests/support/mocks/security.rs
use async_trait::async_trait;
use solblog::application::{ApplicationResult, error::ApplicationError, ports::security::PasswordHasher};

const PREFIX: &str = "plain$";

/// Reversible "hash" so tests can assert on stored values without argon2 cost.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

impl PlainPasswordHasher {
    pub fn hash_of(password: &str) -> String {
        format!("{PREFIX}{password}")
    }
}

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(Self::hash_of(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if Self::hash_of(password) == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("password does not match"))
        }
    }
}

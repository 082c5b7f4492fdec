use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id with the crate defaults; hashes are stored as PHC strings.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    fn hash_blocking(password: &str) -> ApplicationResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| ApplicationError::infrastructure(format!("hashing failed: {err}")))
    }

    fn verify_blocking(password: &str, stored: &str) -> ApplicationResult<()> {
        let parsed = PasswordHash::new(stored).map_err(|err| {
            ApplicationError::infrastructure(format!("stored password hash is malformed: {err}"))
        })?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| ApplicationError::unauthorized("password does not match"))
    }
}

/// Argon2 is deliberately slow, so it runs off the async workers.
async fn run_blocking<T, F>(job: F) -> ApplicationResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> ApplicationResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|err| ApplicationError::infrastructure(format!("hashing task failed: {err}")))?
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        run_blocking(move || Self::hash_blocking(&password)).await
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let stored = expected_hash.to_owned();
        run_blocking(move || Self::verify_blocking(&password, &stored)).await
    }
}

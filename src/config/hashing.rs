use crate::{abstract_trait::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{hash, verify};
use tokio::task;

/// Bcrypt wrapper behind the hashing seam. Both operations are CPU-bound, so
/// they run on the blocking pool instead of the request executor.
#[derive(Clone)]
pub struct Hashing {
    cost: u32,
}

impl Hashing {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let password = password.to_owned();
        let cost = self.cost;

        let hashed = task::spawn_blocking(move || hash(password, cost))
            .await
            .map_err(|err| ServiceError::Internal(format!("hashing task failed: {err}")))??;

        Ok(hashed)
    }

    async fn compare_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<(), ServiceError> {
        let hashed_password = hashed_password.to_owned();
        let password = password.to_owned();

        let is_valid = task::spawn_blocking(move || verify(password, &hashed_password))
            .await
            .map_err(|err| ServiceError::Internal(format!("hashing task failed: {err}")))??;

        if is_valid {
            Ok(())
        } else {
            Err(ServiceError::InvalidCredentials)
        }
    }
}

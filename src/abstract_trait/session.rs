use crate::{errors::RepositoryError, model::session::SessionUser};
use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;

pub type DynSessionStore = Arc<dyn SessionStoreTrait + Send + Sync>;

/// Keyed store of session snapshots with a fixed time-to-live. An expired or
/// missing entry reads back as `None`, which the rest of the system treats
/// as "anonymous".
#[async_trait]
pub trait SessionStoreTrait {
    /// Stores the snapshot and returns the opaque session identifier that
    /// goes into the cookie.
    async fn create_session(
        &self,
        user: &SessionUser,
        ttl: Duration,
    ) -> Result<String, RepositoryError>;

    async fn get_session(&self, session_id: &str) -> Result<Option<SessionUser>, RepositoryError>;

    async fn delete_session(&self, session_id: &str) -> Result<(), RepositoryError>;

    /// Removes entries past their expiry, returning how many were dropped.
    async fn purge_expired(&self) -> Result<u64, RepositoryError>;
}

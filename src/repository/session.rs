use crate::{
    abstract_trait::SessionStoreTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{
        session::SessionUser,
        user::Role,
    },
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::FromRow;
use tracing::{debug, error};
use uuid::Uuid;

/// Session store backed by the same Postgres instance as the credential
/// store. Expiry is enforced at read time and swept in the background; a row
/// past `expires_at` is indistinguishable from a missing one.
#[derive(Clone)]
pub struct SessionRepository {
    db: ConnectionPool,
}

impl SessionRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[derive(FromRow)]
struct SessionRow {
    name: String,
    email: String,
    role: String,
}

impl TryFrom<SessionRow> for SessionUser {
    type Error = RepositoryError;

    fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
        let role = Role::parse(&row.role).ok_or_else(|| {
            RepositoryError::Custom(format!("unknown role '{}' in session", row.role))
        })?;

        Ok(SessionUser {
            name: row.name,
            email: row.email,
            role,
        })
    }
}

#[async_trait]
impl SessionStoreTrait for SessionRepository {
    async fn create_session(
        &self,
        user: &SessionUser,
        ttl: Duration,
    ) -> Result<String, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let session_id = Uuid::new_v4().simple().to_string();
        let expires_at = Utc::now() + ttl;

        sqlx::query(
            r#"
            INSERT INTO sessions (session_id, name, email, role, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&session_id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.role.as_str())
        .bind(expires_at)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create session for '{}': {:?}", user.email, err);
            RepositoryError::from(err)
        })?;

        debug!("Session created for '{}'", user.email);
        Ok(session_id)
    }

    async fn get_session(&self, session_id: &str) -> Result<Option<SessionUser>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT name, email, role
            FROM sessions
            WHERE session_id = $1 AND expires_at > now()
            "#,
        )
        .bind(session_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to read session: {:?}", err);
            RepositoryError::from(err)
        })?;

        row.map(SessionUser::try_from).transpose()
    }

    async fn delete_session(&self, session_id: &str) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete session: {:?}", err);
                RepositoryError::from(err)
            })?;

        debug!("Session deleted");
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to purge expired sessions: {:?}", err);
                RepositoryError::from(err)
            })?;

        Ok(result.rows_affected())
    }
}

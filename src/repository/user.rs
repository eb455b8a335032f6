use crate::{
    abstract_trait::UserRepositoryTrait,
    config::ConnectionPool,
    domain::requests::user::CreateUserRequest,
    errors::RepositoryError,
    model::user::{Role, User},
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::FromRow;
use tracing::{error, info};

#[derive(Clone)]
pub struct UserRepository {
    db: ConnectionPool,
}

impl UserRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// Raw row shape; the role column is text and gets mapped to the closed
/// [`Role`] enum on the way out.
#[derive(FromRow)]
struct UserRow {
    user_id: i32,
    name: String,
    email: String,
    password: String,
    role: String,
    created_at: Option<NaiveDateTime>,
    updated_at: Option<NaiveDateTime>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = Role::parse(&row.role).ok_or_else(|| {
            RepositoryError::Custom(format!(
                "unknown role '{}' on user {}",
                row.role, row.user_id
            ))
        })?;

        Ok(User {
            user_id: row.user_id,
            name: row.name,
            email: row.email,
            password: row.password,
            role,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const USER_COLUMNS: &str = "user_id, name, email, password, role, created_at, updated_at";

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<User, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (name, email, password, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.password)
        .bind(req.role.as_str())
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create user '{}': {:?}", req.email, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created user '{}'", row.email);
        User::try_from(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to look up user '{email}': {:?}", err);
            RepositoryError::from(err)
        })?;

        row.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY user_id"
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch users: {:?}", err);
            RepositoryError::from(err)
        })?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn update_role(&self, user_id: i32, role: Role) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET role = $2, updated_at = current_timestamp
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(role.as_str())
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update role for user {user_id}: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!(
            "🔄 Set role '{role}' on user {user_id} ({} row(s))",
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }
}

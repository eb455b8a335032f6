use crate::{
    abstract_trait::{
        AuthServiceTrait, DynHashing, DynSessionStore, DynUserRepository,
    },
    domain::{
        requests::{
            auth::{LoginRequest, SignupRequest},
            user::CreateUserRequest,
        },
        response::session::NewSession,
    },
    errors::ServiceError,
    model::{session::SessionUser, user::Role},
};
use async_trait::async_trait;
use chrono::Duration;
use tracing::{info, warn};

pub struct AuthServiceDeps {
    pub hash: DynHashing,
    pub users: DynUserRepository,
    pub sessions: DynSessionStore,
    pub session_ttl: Duration,
}

#[derive(Clone)]
pub struct AuthService {
    hash: DynHashing,
    users: DynUserRepository,
    sessions: DynSessionStore,
    session_ttl: Duration,
}

impl AuthService {
    pub fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            hash,
            users,
            sessions,
            session_ttl,
        } = deps;

        Self {
            hash,
            users,
            sessions,
            session_ttl,
        }
    }

    // email is the login key; normalize once so lookups and the unique index
    // agree on case
    fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    async fn issue_session(&self, user: SessionUser) -> Result<NewSession, ServiceError> {
        let session_id = self
            .sessions
            .create_session(&user, self.session_ttl)
            .await?;

        Ok(NewSession { session_id, user })
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn signup(&self, req: &SignupRequest) -> Result<NewSession, ServiceError> {
        let email = Self::normalize_email(&req.email);

        info!("📝 Registering user '{email}'");

        let hashed = self.hash.hash_password(&req.password).await?;

        let user = self
            .users
            .create_user(&CreateUserRequest {
                name: req.name.clone(),
                email,
                password: hashed,
                role: Role::User,
            })
            .await?;

        info!("✅ User '{}' registered", user.email);

        self.issue_session(SessionUser {
            name: user.name,
            email: user.email,
            role: user.role,
        })
        .await
    }

    async fn login(&self, req: &LoginRequest) -> Result<NewSession, ServiceError> {
        let email = Self::normalize_email(&req.email);

        info!("🔐 Login attempt for '{email}'");

        // Unknown email and wrong password collapse into the same error so a
        // caller cannot probe which addresses have accounts.
        let Some(user) = self.users.find_by_email(&email).await? else {
            warn!("Login failed for '{email}': no such user");
            return Err(ServiceError::InvalidCredentials);
        };

        if let Err(err) = self
            .hash
            .compare_password(&user.password, &req.password)
            .await
        {
            return match err {
                ServiceError::InvalidCredentials => {
                    warn!("Login failed for '{email}': bad password");
                    Err(ServiceError::InvalidCredentials)
                }
                other => Err(other),
            };
        }

        info!("✅ Login successful for '{email}'");

        // Snapshot is taken from the stored record, not the request, so a
        // role granted since signup is picked up here.
        self.issue_session(SessionUser {
            name: user.name,
            email: user.email,
            role: user.role,
        })
        .await
    }

    async fn logout(&self, session_id: &str) -> Result<(), ServiceError> {
        self.sessions.delete_session(session_id).await?;
        info!("👋 Session destroyed");
        Ok(())
    }
}

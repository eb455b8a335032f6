#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use chrono::{DateTime, Duration, Utc};
use clubhouse::{
    abstract_trait::{
        DynAuthService, DynHashing, DynUserAdminService, SessionStoreTrait, UserRepositoryTrait,
    },
    config::Hashing,
    di::DependenciesInject,
    domain::requests::user::CreateUserRequest,
    errors::RepositoryError,
    model::{
        session::SessionUser,
        user::{Role, User},
    },
    service::{AuthService, AuthServiceDeps, UserAdminService},
    state::AppState,
};
use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicI32, Ordering},
    },
};
use std::sync::Arc;
use uuid::Uuid;

/// In-memory credential store standing in for the Postgres repository.
/// Enforces the same email uniqueness the real unique index does.
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI32,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    pub fn seed(&self, name: &str, email: &str, password_hash: &str, role: Role) -> i32 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.users.lock().unwrap().push(User {
            user_id: id,
            name: name.to_string(),
            email: email.to_string(),
            password: password_hash.to_string(),
            role,
            created_at: None,
            updated_at: None,
        });
        id
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn role_of(&self, user_id: i32) -> Option<Role> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == user_id)
            .map(|u| u.role)
    }

    pub fn id_of(&self, email: &str) -> Option<i32> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.user_id)
    }
}

#[async_trait]
impl UserRepositoryTrait for MemoryUserRepository {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.email == req.email) {
            return Err(RepositoryError::Custom(format!(
                "duplicate email '{}'",
                req.email
            )));
        }

        let user = User {
            user_id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: req.name.clone(),
            email: req.email.clone(),
            password: req.password.clone(),
            role: req.role,
            created_at: None,
            updated_at: None,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn update_role(&self, user_id: i32, role: Role) -> Result<u64, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.user_id == user_id) {
            Some(user) => {
                user.role = role;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

/// In-memory session store with the same read-time expiry semantics as the
/// Postgres-backed one.
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, (SessionUser, DateTime<Utc>)>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    /// Plants a session directly, bypassing login. Handy for seeding admin
    /// sessions in tests.
    pub fn insert(&self, user: SessionUser) -> String {
        let session_id = Uuid::new_v4().simple().to_string();
        self.sessions.lock().unwrap().insert(
            session_id.clone(),
            (user, Utc::now() + Duration::hours(1)),
        );
        session_id
    }
}

#[async_trait]
impl SessionStoreTrait for MemorySessionStore {
    async fn create_session(
        &self,
        user: &SessionUser,
        ttl: Duration,
    ) -> Result<String, RepositoryError> {
        let session_id = Uuid::new_v4().simple().to_string();
        self.sessions
            .lock()
            .unwrap()
            .insert(session_id.clone(), (user.clone(), Utc::now() + ttl));
        Ok(session_id)
    }

    async fn get_session(&self, session_id: &str) -> Result<Option<SessionUser>, RepositoryError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .get(session_id)
            .filter(|(_, expires_at)| *expires_at > Utc::now())
            .map(|(user, _)| user.clone()))
    }

    async fn delete_session(&self, session_id: &str) -> Result<(), RepositoryError> {
        self.sessions.lock().unwrap().remove(session_id);
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, RepositoryError> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, (_, expires_at)| *expires_at > Utc::now());
        Ok((before - sessions.len()) as u64)
    }
}

pub struct TestApp {
    pub state: Arc<AppState>,
    pub users: Arc<MemoryUserRepository>,
    pub sessions: Arc<MemorySessionStore>,
}

pub fn test_app() -> TestApp {
    let users = Arc::new(MemoryUserRepository::new());
    let sessions = Arc::new(MemorySessionStore::new());

    // cost 4 keeps bcrypt fast in tests
    let hash: DynHashing = Arc::new(Hashing::new(4));

    let auth = Arc::new(AuthService::new(AuthServiceDeps {
        hash,
        users: users.clone(),
        sessions: sessions.clone(),
        session_ttl: Duration::hours(1),
    })) as DynAuthService;

    let user_admin = Arc::new(UserAdminService::new(users.clone())) as DynUserAdminService;

    let state = Arc::new(AppState {
        di_container: DependenciesInject {
            auth,
            user_admin,
            sessions: sessions.clone(),
        },
    });

    TestApp {
        state,
        users,
        sessions,
    }
}

pub fn router(app: &TestApp) -> Router {
    clubhouse::handler::app_router(app.state.clone())
}

pub fn bcrypt_hash(password: &str) -> String {
    bcrypt::hash(password, 4).unwrap()
}

pub fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form_post_with_session(uri: &str, body: &str, session_id: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, format!("clubhouse_session={session_id}"))
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_session(uri: &str, session_id: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, format!("clubhouse_session={session_id}"))
        .body(Body::empty())
        .unwrap()
}

/// Pulls the session identifier out of a Set-Cookie response header.
pub fn session_id_from<B>(response: &Response<B>) -> Option<String> {
    let set_cookie = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    let pair = set_cookie.split(';').next()?;
    let (name, value) = pair.split_once('=')?;
    (name == "clubhouse_session").then(|| value.to_string())
}

pub fn location_of<B>(response: &Response<B>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

use crate::{
    abstract_trait::{DynAuthService, DynHashing, DynSessionStore, DynUserAdminService},
    config::ConnectionPool,
    repository::{SessionRepository, UserRepository},
    service::{AuthService, AuthServiceDeps, UserAdminService},
};
use chrono::Duration;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub session_ttl: Duration,
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth: DynAuthService,
    pub user_admin: DynUserAdminService,
    pub sessions: DynSessionStore,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth", &"DynAuthService")
            .field("user_admin", &"DynUserAdminService")
            .field("sessions", &"DynSessionStore")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hash,
            session_ttl,
        } = deps;

        let users = Arc::new(UserRepository::new(pool.clone()));
        let sessions: DynSessionStore = Arc::new(SessionRepository::new(pool));

        let auth = Arc::new(AuthService::new(AuthServiceDeps {
            hash,
            users: users.clone(),
            sessions: sessions.clone(),
            session_ttl,
        })) as DynAuthService;

        let user_admin = Arc::new(UserAdminService::new(users)) as DynUserAdminService;

        Self {
            auth,
            user_admin,
            sessions,
        }
    }
}

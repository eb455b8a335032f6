use crate::{
    abstract_trait::DynHashing,
    config::{Config, ConnectionPool, Hashing},
    di::{DependenciesInject, DependenciesInjectDeps},
};
use chrono::Duration;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let hashing = Arc::new(Hashing::new(config.bcrypt_cost)) as DynHashing;

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            pool,
            hash: hashing,
            session_ttl: Duration::seconds(config.session_ttl_secs),
        });

        Self { di_container }
    }
}

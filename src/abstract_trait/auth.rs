use crate::{
    domain::{
        requests::auth::{LoginRequest, SignupRequest},
        response::session::NewSession,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn signup(&self, req: &SignupRequest) -> Result<NewSession, ServiceError>;
    async fn login(&self, req: &LoginRequest) -> Result<NewSession, ServiceError>;
    async fn logout(&self, session_id: &str) -> Result<(), ServiceError>;
}

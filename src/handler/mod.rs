pub mod admin;
pub mod auth;
pub mod pages;

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/signup", get(pages::signup_form).post(auth::signup))
        .route("/login", get(pages::login_form).post(auth::login))
        .route("/members", get(pages::members))
        .route("/logout", get(auth::logout))
        .route("/admin", get(admin::list_users))
        .route("/admin/promote/{id}", post(admin::promote))
        .route("/admin/demote/{id}", post(admin::demote))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use crate::{
    errors::HttpError,
    middleware::AdminSession,
    model::user::Role,
    state::AppState,
    view::{self, AdminTemplate},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    AdminSession(current): AdminSession,
) -> Response {
    match state.di_container.user_admin.list_users().await {
        Ok(users) => view::render(&AdminTemplate { current, users }, StatusCode::OK),
        Err(err) => HttpError::from(err).into_response(),
    }
}

pub async fn promote(
    State(state): State<Arc<AppState>>,
    AdminSession(_current): AdminSession,
    Path(id): Path<i32>,
) -> Response {
    set_role(state, id, Role::Admin).await
}

pub async fn demote(
    State(state): State<Arc<AppState>>,
    AdminSession(_current): AdminSession,
    Path(id): Path<i32>,
) -> Response {
    set_role(state, id, Role::User).await
}

async fn set_role(state: Arc<AppState>, id: i32, role: Role) -> Response {
    match state.di_container.user_admin.set_role(id, role).await {
        // Back to the list either way; a miss is a no-op by design.
        Ok(()) => Redirect::to("/admin").into_response(),
        Err(err) => HttpError::from(err).into_response(),
    }
}

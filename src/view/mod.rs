use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::{domain::response::user::UserResponse, model::session::SessionUser};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub user: Option<SessionUser>,
}

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "members.html")]
pub struct MembersTemplate {
    pub user: SessionUser,
    pub image: &'static str,
}

#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub current: SessionUser,
    pub users: Vec<UserResponse>,
}

#[derive(Template)]
#[template(path = "forbidden.html")]
pub struct ForbiddenTemplate {
    pub user: SessionUser,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub user: Option<SessionUser>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate;

pub fn render(template: &impl Template, status: StatusCode) -> Response {
    match template.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            error!("❌ Template rendering failed: {err}");
            internal_error_page()
        }
    }
}

/// Generic 500 page. Never carries internal detail; whatever went wrong has
/// already been logged at the failure site.
pub fn internal_error_page() -> Response {
    let body = ErrorTemplate
        .render()
        .unwrap_or_else(|_| "Something went wrong".to_string());

    (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
}

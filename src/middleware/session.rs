use crate::{model::session::SessionUser, state::AppState, view};
use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tracing::error;

pub const SESSION_COOKIE: &str = "clubhouse_session";

/// Resolves the session cookie against the session store. A missing cookie
/// or an expired/unknown session yields `None` (anonymous); only a store
/// failure rejects the request.
pub struct CurrentSession(pub Option<SessionUser>);

impl FromRequestParts<Arc<AppState>> for CurrentSession {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|err| match err {})?;

        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            return Ok(Self(None));
        };

        match state
            .di_container
            .sessions
            .get_session(cookie.value())
            .await
        {
            Ok(user) => Ok(Self(user)),
            Err(err) => {
                error!("❌ Session lookup failed: {err}");
                Err(view::internal_error_page())
            }
        }
    }
}

/// Guard: requires an authenticated session. Anonymous callers are redirected
/// to the login entry point and the handler never runs.
pub struct AuthSession(pub SessionUser);

impl FromRequestParts<Arc<AppState>> for AuthSession {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let CurrentSession(session) = CurrentSession::from_request_parts(parts, state).await?;

        match session {
            Some(user) => Ok(Self(user)),
            None => Err(Redirect::to("/login").into_response()),
        }
    }
}

/// Guard: requires an authenticated session with the admin role. Anonymous
/// callers get the login redirect; an authenticated non-admin gets an
/// explicit 403 naming their identity, so they know they were recognized
/// but disallowed rather than treated as anonymous.
pub struct AdminSession(pub SessionUser);

impl FromRequestParts<Arc<AppState>> for AdminSession {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let AuthSession(user) = AuthSession::from_request_parts(parts, state).await?;

        if user.is_admin() {
            Ok(Self(user))
        } else {
            Err(view::render(
                &view::ForbiddenTemplate { user },
                StatusCode::FORBIDDEN,
            ))
        }
    }
}

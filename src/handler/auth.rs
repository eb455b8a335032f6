use crate::{
    domain::requests::auth::{
        LOGIN_FIELD_ORDER, LoginRequest, SIGNUP_FIELD_ORDER, SignupRequest,
    },
    errors::{HttpError, ServiceError},
    middleware::SESSION_COOKIE,
    state::AppState,
    utils::first_validation_message,
    view::{self, LoginTemplate, SignupTemplate},
};
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use std::sync::Arc;
use validator::Validate;

fn session_cookie(session_id: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id))
        .path("/")
        .http_only(true)
        .build()
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(req): Form<SignupRequest>,
) -> Response {
    // Validation failures re-render the form before any side effect happens.
    if let Err(errors) = req.validate() {
        let message = first_validation_message(&errors, SIGNUP_FIELD_ORDER);
        return view::render(
            &SignupTemplate {
                error: Some(message),
            },
            StatusCode::OK,
        );
    }

    match state.di_container.auth.signup(&req).await {
        Ok(new_session) => {
            let jar = jar.add(session_cookie(new_session.session_id));
            (jar, Redirect::to("/members")).into_response()
        }
        Err(err) => HttpError::from(err).into_response(),
    }
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(req): Form<LoginRequest>,
) -> Response {
    if let Err(errors) = req.validate() {
        let message = first_validation_message(&errors, LOGIN_FIELD_ORDER);
        return view::render(
            &LoginTemplate {
                error: Some(message),
            },
            StatusCode::OK,
        );
    }

    match state.di_container.auth.login(&req).await {
        Ok(new_session) => {
            let jar = jar.add(session_cookie(new_session.session_id));
            (jar, Redirect::to("/members")).into_response()
        }
        Err(ServiceError::InvalidCredentials) => view::render(
            &LoginTemplate {
                error: Some("Invalid email or password".to_string()),
            },
            StatusCode::OK,
        ),
        Err(err) => HttpError::from(err).into_response(),
    }
}

pub async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Err(err) = state.di_container.auth.logout(cookie.value()).await {
            return HttpError::from(err).into_response();
        }
    }

    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/"));
    (jar, Redirect::to("/")).into_response()
}
